//! 에러 타입 정의 모듈
//!
//! paccum에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//!
//! 파싱 실패 라인(불량 라인)은 에러로 취급하지 않고 진단 출력 후 건너뛰므로
//! 여기에는 포함되지 않습니다. 여기 정의된 에러들은 모두 실행을 중단시킵니다.

use std::path::PathBuf;
use thiserror::Error;

/// paccum에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum PaccumError {
    /// 파일 열기 실패
    #[error("파일을 열 수 없습니다 ({file:?}): {reason}")]
    FileOpenError { file: PathBuf, reason: String },

    /// 파일 내용 읽기 실패 (UTF-8이 아닌 내용 등)
    #[error("파일을 읽을 수 없습니다 ({file:?}): {reason}")]
    FileReadError { file: PathBuf, reason: String },

    /// 파싱된 레코드가 JSON 객체가 아님
    #[error("레코드가 JSON 객체가 아닙니다 ({file:?})")]
    RecordNotObject { file: PathBuf },

    /// 평탄화에 필요한 필수 필드 누락
    #[error("필수 필드가 없습니다 ({file:?}): {field}")]
    MissingField { file: PathBuf, field: String },

    /// 필드가 매핑(JSON 객체)이 아님
    #[error("필드가 JSON 객체가 아닙니다 ({file:?}): {field}")]
    FieldNotObject { file: PathBuf, field: String },

    /// CSV 파일 쓰기 실패
    #[error("CSV 파일 쓰기 실패: {reason}")]
    WriteError { reason: String },

    /// 유효하지 않은 파일 이름 패턴
    #[error("유효하지 않은 패턴: {pattern}")]
    InvalidPattern { pattern: String },
}

/// paccum 결과 타입 별칭
pub type Result<T> = std::result::Result<T, PaccumError>;
