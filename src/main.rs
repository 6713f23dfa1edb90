use book_seed::{bootstrap, config};

fn main() {
    config::load_dotenv();

    let _guard = match config::log::Config::from_env()
        .and_then(|c| config::log::set_global_logging_config(&c))
    {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("로깅 설정을 적용할 수 없어 기본 설정을 사용합니다: {}", e);
            tracing_subscriber::fmt().with_writer(std::io::stderr).init();
            None
        }
    };

    // 오류는 run 안에서 보고되며 종료 코드는 구분하지 않는다.
    _ = bootstrap::run();
}
