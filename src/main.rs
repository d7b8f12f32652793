use clap::Parser;
use lighting_retrofit_toolbox::{app, cli::Cli, logging};

/// 프로그램의 엔트리 포인트. 인자를 해석하고 로그를 초기화한 뒤 실행한다.
fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = app::run(cli) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}
