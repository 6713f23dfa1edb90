use config::{Config, ConfigError, Environment};
use std::env;

pub use config::Map;
use serde::Deserialize;

pub mod log;

/// 실행 환경에 따라 .env 파일을 로드한다.
/// 파일이 없어도 오류로 취급하지 않는다.
pub fn load_dotenv() {
    let env_filename = env::var("RUN_MODE")
        .map(|env| format!(".env.{}", env))
        .unwrap_or_else(|_| ".env".into());

    dotenvy::from_filename(env_filename).ok();
}

/// `DB_` 로 시작하는 환경 변수에서 읽어 들인 데이터베이스 접속 정보.
#[derive(Debug, Clone, Deserialize)]
pub struct Database {
    user: String,
    password: String,
    host: String,
    name: String,
    port: Option<u16>,
}

impl Database {
    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn url(&self) -> String {
        match self.port {
            Some(port) => format!("postgres://{}:{}@{}:{}/{}", self.user, self.password, self.host, port, self.name),
            None => format!("postgres://{}:{}@{}/{}", self.user, self.password, self.host, self.name),
        }
    }
}

/// 프로세스 환경 변수에서 접속 정보를 읽는다.
pub fn load_database_config() -> Result<Database, ConfigError> {
    database_config_from(None)
}

/// `source` 가 주어지면 프로세스 환경 대신 해당 맵을 환경 변수로 사용한다.
pub fn database_config_from(source: Option<Map<String, String>>) -> Result<Database, ConfigError> {
    let config = Config::builder()
        .add_source(Environment::with_prefix("DB").source(source))
        .build()?;

    config.try_deserialize()
}
