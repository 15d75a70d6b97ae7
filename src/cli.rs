//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.
//!
//! 인자는 스캔할 루트 경로 하나뿐입니다. 출력 파일 이름은 고정
//! (`data.csv`, 현재 작업 디렉토리)이며 플래그는 없습니다.

use clap::Parser;
use std::path::PathBuf;

/// paccum CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "paccum",
    author = "YourName <your@email.com>",
    version,
    about = "PASS DATA ACCUMULATOR - 패스 결과 JSONL 파일들을 하나의 CSV 테이블로 병합하는 CLI 도구",
    long_about = r#"
PASS DATA ACCUMULATOR
=====================

지정된 루트 디렉토리 아래의 모든 디렉토리를 재귀 탐색하여
pass_data로 시작하는 결과 파일들의 JSON 레코드를 평탄화한 뒤
하나의 CSV 테이블(data.csv)로 병합합니다.

특징:
  • 디렉토리 단위 Batch 수집 및 컬럼 합집합 병합
  • 파싱 실패 라인은 진단 출력 후 건너뜀 (실행 중단 없음)
  • 필수 필드 누락은 즉시 실패 (불완전한 테이블 방지)
  • 디렉토리 단위 진행 상황 및 처리 통계 출력

예제:
  paccum ./results
  paccum /data/experiments/run42
"#
)]
pub struct Args {
    /// 스캔할 결과 루트 디렉토리 경로
    pub root: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_root_argument() {
        let args = Args::parse_from(["paccum", "./results"]);
        assert_eq!(args.root, PathBuf::from("./results"));
    }

    #[test]
    fn test_root_argument_required() {
        assert!(Args::try_parse_from(["paccum"]).is_err());
    }
}
