//! 통계 및 유틸리티 모듈
//!
//! 실행 중 누적되는 카운터 수집과 진행 상황/요약 출력을 담당합니다.
//!
//! 카운터는 전역 상태가 아니라 파이프라인에 명시적으로 전달되는 값입니다.
//! 실행은 단일 스레드이므로 일반 필드로 충분합니다.

use colored::Colorize;
use std::time::{Duration, Instant};

/// 처리 통계 구조체
#[derive(Debug, Default)]
pub struct Statistics {
    /// 발견된 pass_data 파일 수
    pub total_files: usize,
    /// 파싱에 성공한 레코드 수 (누적)
    parsed_records: usize,
    /// 불량 라인 수 (누적)
    malformed_lines: usize,
    /// 읽은 총 바이트
    bytes_read: u64,
    /// 쓴 총 바이트
    bytes_written: u64,
    /// 처리 시작 시간
    start_time: Option<Instant>,
}

impl Statistics {
    /// 새 통계 인스턴스 생성
    pub fn new(total_files: usize) -> Self {
        Self {
            total_files,
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// 파싱 성공 카운트 증가
    pub fn record_parsed(&mut self) {
        self.parsed_records += 1;
    }

    /// 불량 라인 카운트 증가
    pub fn record_malformed(&mut self) {
        self.malformed_lines += 1;
    }

    /// 읽은 바이트 추가
    pub fn add_bytes_read(&mut self, bytes: u64) {
        self.bytes_read += bytes;
    }

    /// 쓴 바이트 추가
    pub fn add_bytes_written(&mut self, bytes: u64) {
        self.bytes_written += bytes;
    }

    /// 파싱 성공 레코드 수 반환
    pub fn parsed_records(&self) -> usize {
        self.parsed_records
    }

    /// 불량 라인 수 반환
    pub fn malformed_lines(&self) -> usize {
        self.malformed_lines
    }

    /// 경과 시간 반환
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// 디렉토리 처리 후 누적 진행 상황 한 줄 출력
    pub fn print_progress(&self) {
        println!(
            "  {} 누적 레코드: {}, 불량 라인: {}",
            "📦".bright_white(),
            self.parsed_records.to_string().green(),
            self.malformed_lines.to_string().yellow()
        );
    }

    /// 처리 통계 요약 출력
    pub fn print_summary(&self) {
        let elapsed = self.elapsed();

        println!("\n{}", "═".repeat(50).bright_blue());
        println!("{}", " 📊 처리 통계".bright_white().bold());
        println!("{}", "═".repeat(50).bright_blue());

        println!(
            "  {} 전체 파일:    {}",
            "📁".bright_cyan(),
            self.total_files
        );
        println!(
            "  {} 파싱 레코드:  {}",
            "✅".bright_green(),
            self.parsed_records.to_string().green()
        );

        if self.malformed_lines > 0 {
            println!(
                "  {} 불량 라인:    {}",
                "❌".bright_red(),
                self.malformed_lines.to_string().red()
            );
        } else {
            println!("  {} 불량 라인:    {}", "✅".bright_green(), "0".green());
        }

        println!(
            "  {} 입력 용량:    {}",
            "📥".bright_yellow(),
            format_bytes(self.bytes_read)
        );
        println!(
            "  {} 출력 용량:    {}",
            "📤".bright_magenta(),
            format_bytes(self.bytes_written)
        );

        let total_lines = self.parsed_records + self.malformed_lines;
        if total_lines > 0 {
            let parse_rate = (self.parsed_records as f64 / total_lines as f64) * 100.0;
            println!("  {} 파싱 성공률:  {:.1}%", "📈".bright_white(), parse_rate);
        }

        println!(
            "  {} 처리 시간:    {:.2}초",
            "⏱️".bright_cyan(),
            elapsed.as_secs_f64()
        );

        println!("{}", "═".repeat(50).bright_blue());
    }
}

/// 바이트를 읽기 쉬운 형식으로 변환
///
/// # Arguments
/// * `bytes` - 바이트 수
///
/// # Returns
/// 형식화된 문자열 (예: "1.25 MB")
///
/// # Examples
/// ```
/// use paccum::stats::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1048576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
