use tracing_subscriber::{fmt, EnvFilter};

/// 로그 출력을 초기화한다.
///
/// RUST_LOG가 있으면 그 값을 따르고, 없으면 `verbose`에 따라 debug/warn을 쓴다.
/// 로그는 stderr로 보내 표준 출력의 계산 결과와 섞이지 않게 한다.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
