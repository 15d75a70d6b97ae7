//! 패턴 매칭 모듈
//!
//! glob 패턴을 사용한 결과 파일 이름 필터링을 담당합니다.

use glob::Pattern;

use crate::error::{PaccumError, Result};

/// 수집 대상 결과 파일의 이름 패턴
///
/// 패스 파이프라인이 생성하는 결과 파일은 모두 `pass_data`로 시작합니다.
/// 확장자는 필터링하지 않습니다.
pub const RESULT_FILE_PATTERN: &str = "pass_data*";

/// 컴파일된 결과 파일 이름 매처
pub struct ResultFileMatcher {
    pattern: Pattern,
}

impl ResultFileMatcher {
    /// 새 매처 생성
    ///
    /// # Returns
    /// 컴파일된 `ResultFileMatcher` 또는 에러
    ///
    /// # Examples
    /// ```
    /// use paccum::pattern::ResultFileMatcher;
    ///
    /// let matcher = ResultFileMatcher::new().unwrap();
    /// assert!(matcher.matches("pass_data_0"));
    /// assert!(!matcher.matches("summary.json"));
    /// ```
    pub fn new() -> Result<Self> {
        let pattern =
            Pattern::new(RESULT_FILE_PATTERN).map_err(|_| PaccumError::InvalidPattern {
                pattern: RESULT_FILE_PATTERN.to_string(),
            })?;

        Ok(Self { pattern })
    }

    /// 파일 이름이 결과 파일 패턴과 일치하는지 확인
    ///
    /// # Arguments
    /// * `file_name` - 검사할 파일 이름 (경로 아님)
    pub fn matches(&self, file_name: &str) -> bool {
        self.pattern.matches(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_prefix() {
        let matcher = ResultFileMatcher::new().unwrap();
        assert!(matcher.matches("pass_data_0"));
        assert!(matcher.matches("pass_data_12.json"));
        assert!(matcher.matches("pass_data"));
    }

    #[test]
    fn test_rejects_other_names() {
        let matcher = ResultFileMatcher::new().unwrap();
        assert!(!matcher.matches("pass_dat_0"));
        assert!(!matcher.matches("data.csv"));
        assert!(!matcher.matches("apass_data_0"));
        assert!(!matcher.matches("summary.json"));
    }

    #[test]
    fn test_no_extension_filtering() {
        let matcher = ResultFileMatcher::new().unwrap();
        assert!(matcher.matches("pass_data_0.txt"));
        assert!(matcher.matches("pass_data.log"));
    }
}
