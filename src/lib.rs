//! paccum - PASS DATA ACCUMULATOR
//!
//! 컴파일러 패스 파이프라인이 생성한 pass_data 결과 파일(JSON Lines)들을
//! 하나의 CSV 테이블로 병합하는 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 🔍 **재귀 탐색**: 루트 경로 아래 모든 디렉토리에서 pass_data 파일 수집
//! - 🧾 **라인 단위 파싱**: 각 라인을 독립적인 JSON 레코드로 파싱
//! - 🛡️ **불량 라인 허용**: 파싱 실패 라인은 진단/집계 후 건너뜀 (실행 중단 없음)
//! - 🧱 **평탄화**: 중첩 피처 매핑을 `pass`, `name`, `modified`와 함께 행으로 변환
//! - 🧮 **컬럼 합집합 병합**: 디렉토리 단위 Batch를 outer 정렬로 하나의 테이블로 병합
//! - 📊 **진행 상황 출력**: 디렉토리 단위 누적 레코드/불량 라인 수 표시
//! - 🎨 **컬러 출력**: 가독성 높은 컬러 터미널 출력
//!
//! # 예제
//!
//! ```bash
//! # 기본 사용법: 현재 디렉토리에 data.csv 생성
//! paccum ./results
//! ```

pub mod cli;
pub mod error;
pub mod pattern;
pub mod processor;
pub mod record;
pub mod stats;
pub mod table;

// Re-exports for convenient access
pub use cli::Args;
pub use error::{PaccumError, Result};
pub use pattern::ResultFileMatcher;
pub use processor::{collect_result_files, process_file, DirFiles};
pub use record::{Record, Row};
pub use stats::{format_bytes, Statistics};
pub use table::{Batch, Table};
