use std::{fs, path::PathBuf, sync::Arc};

use routelog::{
    config::Config,
    log::{
        log_formatter::{LevelPrefixFormatter, LogFormatter},
        log_level::LogLevel,
        log_sink::LogSink,
        logger::Logger,
        logger_configuration::LoggerConfiguration,
        stream_sink::StreamSink,
    },
};

fn scratch_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("routelog-{name}-pid{}", std::process::id()))
}

#[test]
fn file_sink_appends_formatted_lines() {
    let dir = scratch_dir("file-sink");
    let _ = fs::remove_dir_all(&dir);
    let path = dir.join("nested").join("app.log");

    let file: Arc<dyn LogSink> = Arc::new(StreamSink::append_to(&path).expect("open log file"));
    let prefix: Vec<Arc<dyn LogFormatter>> = vec![Arc::new(LevelPrefixFormatter)];
    let log = Logger::new(
        LoggerConfiguration::builder()
            .route_formatted(LogLevel::WARN | LogLevel::ERROR, prefix, vec![file])
            .build(),
    );

    log.info(|| "skipped".into()).expect("info");
    log.warn(|| "low disk".into()).expect("warn");
    log.error(|| "disk full".into()).expect("error");

    let text = fs::read_to_string(&path).expect("read log file");
    assert_eq!(text, "[Warn] low disk\n[Error] disk full\n");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn routes_loaded_from_config_file() {
    let dir = scratch_dir("config");
    fs::create_dir_all(&dir).expect("create dir");
    let ini = dir.join("logging.ini");
    let log_path = dir.join("audit.log");
    let _ = fs::remove_file(&log_path);
    fs::write(&ini, "[Logging]\naudit = \"Event | Error\"\n").expect("write ini");

    let audit: Arc<dyn LogSink> = Arc::new(StreamSink::append_to(&log_path).expect("open"));
    let sinks = [("audit".to_string(), audit)].into_iter().collect();

    let config = Config::load(&ini).expect("load ini");
    let log = Logger::new(LoggerConfiguration::from_config(&config, &sinks).expect("routes"));

    log.event(|| "user login".into()).expect("event");
    log.warn(|| "not audited".into()).expect("warn");

    let text = fs::read_to_string(&log_path).expect("read audit log");
    assert_eq!(text, "user login\n");

    let _ = fs::remove_dir_all(&dir);
}
