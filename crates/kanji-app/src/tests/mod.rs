use std::path::Path;

use kanji_config::Config;
use kanji_types::MergeRule;

use crate::state::AppState;


/// State pointing every provider at `server_url` and every file at `dir`
fn test_state(server_url: &str, dir: &Path) -> AppState {
    let mut config = Config::new();
    config.provider.kanji_api_url = format!("{server_url}/v1/kanji");
    config.provider.convert_url = format!("{server_url}/tools/convert");
    config.provider.convert_token = "test-token".to_string();
    config.provider.timeout_seconds = 5;
    config.cache.dir = Some(dir.join("cache"));
    config.report.output_dir = dir.join("reports");
    config.words.scan_delay_ms = 0;
    config.words.results_dir = dir.join("results");
    config.words.merge_rule = MergeRule::DoubleIncrement;

    AppState::new(config).expect("state builds")
}

const NICHI: &str = r#"{
    "kanji": "日",
    "grade": 1,
    "stroke_count": 4,
    "meanings": ["day", "sun", "Japan", "counter for days"],
    "kun_readings": ["ひ", "-び", "-か"],
    "on_readings": ["ニチ", "ジツ"],
    "name_readings": ["あ", "あき"],
    "jlpt": 4,
    "unicode": "65e5",
    "heisig_en": "day"
}"#;

const ANALYZER_PAGE: &str = r#"<html><body>
  <div class="tool__results">
    <a data-tooltip="ばしょ&lt;br&gt;noun&lt;br&gt;place">場所</a>
    <a data-tooltip="は&lt;br&gt;postposition&lt;br&gt;topic marker">は</a>
    <a data-tooltip="つたえる&lt;br&gt;verb&lt;br&gt;to convey">伝えました</a>
  </div>
</body></html>"#;
