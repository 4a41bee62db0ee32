//! Invite Server - 婚礼邀请 RSVP 服务
//!
//! # 架构概述
//!
//! 本模块是 Invite Server 的主入口，提供以下核心功能：
//!
//! - **数据库** (`db`): 嵌入式 SQLite 存储 (sqlx)
//! - **认证** (`auth`): JWT + Argon2 管理员认证 (allow-list)
//! - **HTTP API** (`api`): 宾客查询、RSVP 提交、管理接口
//!
//! # 模块结构
//!
//! ```text
//! invite-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证、管理员中间件
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层
//! └── utils/         # 错误、日志、校验
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentAdmin, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv + 日志)
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ____             _ __
  /  _/___ _  __   (_) /____
 _/ //  _ \ |/ /  / / __/ -_)
/___/_/ /_/___/  /_/\__/\__/
    "#
    );
}
