//! 认证授权模块
//!
//! 提供 JWT 认证和管理员中间件：
//! - [`JwtService`] - JWT 令牌服务
//! - [`CurrentAdmin`] - 当前管理员上下文
//! - [`require_admin`] - 管理员认证中间件 (allow-list 复核)

pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, CurrentAdmin, JwtConfig, JwtError, JwtService};
pub use middleware::require_admin;
