use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::recommendation::ReplacementPolicy;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/ko/en)
    pub language: String,
    /// 외부 언어팩 디렉터리
    pub language_pack_dir: Option<String>,
    /// 금액 표시 기호
    pub currency_symbol: String,
    /// 교체 판단 정책
    pub policy: ReplacementPolicy,
    #[serde(skip)]
    path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            language_pack_dir: None,
            currency_symbol: "$".into(),
            policy: ReplacementPolicy::default(),
            path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류 ({path}): {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// ./config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_at(DEFAULT_CONFIG_PATH)
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본값으로 만들어 저장한다.
pub fn load_or_default_at(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut cfg: Config = toml::from_str(&content)?;
        cfg.path = path.to_path_buf();
        tracing::debug!(path = %path.display(), "설정 파일 로드");
        Ok(cfg)
    } else {
        let cfg = Config {
            path: path.to_path_buf(),
            ..Config::default()
        };
        cfg.save()?;
        tracing::info!(path = %path.display(), "기본 설정 파일 생성");
        Ok(cfg)
    }
}

impl Config {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 설정을 로드한 경로에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(&self.path, content).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), "설정 저장");
        Ok(())
    }
}
