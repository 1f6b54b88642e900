use pro_unit_converter::{app, config, i18n};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = config::load_or_default()?;
    // 첫 번째 인자로 언어 코드(ko/en/auto)를 받을 수 있다.
    let lang_arg = std::env::args().nth(1).unwrap_or_default();
    let lang = i18n::resolve_language(&lang_arg, cfg.language.as_deref());
    let tr = i18n::Translator::new_with_pack(&lang, None);
    app::run(&mut cfg, &tr)?;
    Ok(())
}
