use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use sys_locale::get_locale;
use thiserror::Error;
use tracing::{debug, info};

/// 메시지 키 모음.
pub mod keys {
    pub const WELCOME: &str = "welcome";
    pub const LOAN_AMOUNT: &str = "loan_amount";
    pub const INVALID_LOAN_AMOUNT: &str = "invalid_loan_amount";
    pub const APR: &str = "apr";
    pub const INVALID_APR: &str = "invalid_apr";
    pub const LOAN_DURATION: &str = "loan_duration";
    pub const INVALID_LOAN_DURATION: &str = "invalid_loan_duration";
    pub const RESULT: &str = "result";
    pub const RUN_AGAIN: &str = "run_again";
    pub const INVALID_YES_NO: &str = "invalid_yes_no";
    pub const FINISHED: &str = "finished";

    /// 카탈로그에 반드시 있어야 하는 키.
    pub const REQUIRED: [&str; 11] = [
        WELCOME,
        LOAN_AMOUNT,
        INVALID_LOAN_AMOUNT,
        APR,
        INVALID_APR,
        LOAN_DURATION,
        INVALID_LOAN_DURATION,
        RESULT,
        RUN_AGAIN,
        INVALID_YES_NO,
        FINISHED,
    ];
}

/// 키로 안내 문구를 찾아 주는 역할.
pub trait MessageProvider {
    fn lookup(&self, key: &str) -> &str;
}

/// 내장 언어팩 언어.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Ko,
}

impl Language {
    /// 언어 코드를 해석한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn from_code(code: &str) -> Self {
        if code.trim().to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ko => "ko",
        }
    }
}

/// 메시지 카탈로그 로드 시 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// 파일 입출력 오류
    #[error("cannot read message catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// TOML 파싱 오류
    #[error("cannot parse message catalog: {0}")]
    Parse(#[from] toml::de::Error),
    /// 필수 키 누락 또는 빈 문자열
    #[error("message catalog is missing `{0}`")]
    MissingKey(&'static str),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    meta: CatalogMeta,
    messages: HashMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
struct CatalogMeta {
    language: Option<String>,
}

/// 프로그램 시작 시 한 번 로드되는 안내 문구 표.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    language: String,
    entries: HashMap<String, String>,
}

impl MessageCatalog {
    /// 외부 파일이 주어지면 그것을, 아니면 내장 언어팩을 로드한다.
    pub fn load(lang_code: &str, path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::built_in(Language::from_code(lang_code)),
        }
    }

    /// 빌드 시 포함된 언어팩을 로드한다.
    pub fn built_in(lang: Language) -> Result<Self, CatalogError> {
        let src = match lang {
            Language::En => include_str!("../locales/en.toml"),
            Language::Ko => include_str!("../locales/ko.toml"),
        };
        let catalog = Self::from_toml_str(src)?;
        info!(language = catalog.language(), "loaded built-in message catalog");
        Ok(catalog)
    }

    /// TOML 언어팩 파일을 로드한다.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&content)?;
        info!(
            path = %path.display(),
            language = catalog.language(),
            "loaded message catalog"
        );
        Ok(catalog)
    }

    /// `[messages]` 테이블을 가진 TOML 문자열을 해석하고 필수 키를 확인한다.
    pub fn from_toml_str(src: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(src)?;
        for key in keys::REQUIRED {
            match file.messages.get(key) {
                Some(text) if !text.trim().is_empty() => {}
                _ => return Err(CatalogError::MissingKey(key)),
            }
        }
        debug!(entries = file.messages.len(), "message catalog validated");
        Ok(Self {
            language: file.meta.language.unwrap_or_else(|| "en".to_string()),
            entries: file.messages,
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

impl MessageProvider for MessageCatalog {
    fn lookup(&self, key: &str) -> &str {
        self.entries
            .get(key)
            .map(String::as_str)
            .unwrap_or("[missing message]")
    }
}

/// CLI 플래그/환경 변수/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(requested: Option<&str>) -> String {
    requested
        .and_then(normalize_lang)
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

/// `ko_KR.UTF-8` 같은 로케일 문자열에서 지원 언어 코드만 뽑는다.
fn locale_language(locale: &str) -> Option<String> {
    let base = locale.split(['.', '_', '-', '@']).next()?;
    [Language::En, Language::Ko]
        .into_iter()
        .find(|lang| base.eq_ignore_ascii_case(lang.as_code()))
        .map(|lang| lang.as_code().to_string())
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(locale_language) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|value| locale_language(&value))
}
