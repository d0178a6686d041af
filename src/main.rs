use pico_args;
use widh_site::banner::BannerRotator;
use widh_site::config;
use widh_site::i18n::{FormatDict, I18n};
use widh_site::theme::SiteTheme;

fn main() {
    let mut args = pico_args::Arguments::from_env();
    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap();

    let config = config::load().unwrap_or_default();
    let i18n = I18n::new(lang, &config);
    let theme = SiteTheme::new(config.theme_mode);

    println!(
        "{}",
        i18n.t_with("greeting", &FormatDict::map([("name", "widh")]))
    );
    println!(
        "[{} / {} on {}]",
        i18n.current_locale(),
        if theme.mode.is_dark() { "dark" } else { "light" },
        theme.colors.background.to_hex()
    );

    let mut banner = BannerRotator::new([
        i18n.t("banner-welcome"),
        i18n.t_with("banner-work", &FormatDict::map([("project", "this site")])),
        i18n.t_with("banner-contact", &FormatDict::seq(["hello@widh.me"])),
    ]);
    for _ in 0..banner.len() {
        if let Some(line) = banner.current() {
            println!("  * {}", line);
        }
        banner.advance();
    }
}
