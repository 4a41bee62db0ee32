use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// 服务器状态
///
/// 所有 HTTP handler 通过 axum `State` 共享这一结构。内部成员都是
/// 句柄 (pool / Arc)，Clone 代价低。
#[derive(Clone)]
pub struct ServerState {
    /// SQLite 连接池
    pub pool: SqlitePool,
    /// JWT 令牌服务
    jwt_service: Arc<JwtService>,
    /// 服务器配置
    pub config: Arc<Config>,
}

impl ServerState {
    /// 初始化服务器状态 (数据库 + JWT)
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Ok(Self {
            pool: db.pool,
            jwt_service,
            config: Arc::new(config.clone()),
        })
    }

    /// 基于已有连接池构建状态 (测试场景)
    pub fn with_pool(config: Config, pool: SqlitePool) -> Self {
        Self {
            pool,
            jwt_service: Arc::new(JwtService::with_config(config.jwt.clone())),
            config: Arc::new(config),
        }
    }

    pub fn get_jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }
}
