//! Embedded Arabic UI text.

pub const WINDOW_TITLE: &str = "اختبار كرة القدم";
pub const MENU_TITLE: &str = "اختبار كرة القدم";
pub const MENU_TAGLINE: &str = "هل أنت مستعد لاختبار معلوماتك الكروية؟";
pub const START_BUTTON: &str = "ابدأ اللعب";
pub const RETRY_BUTTON: &str = "إعادة المحاولة";
pub const NEXT_BUTTON: &str = "السؤال التالي";
pub const LOADING_MESSAGE: &str = "...جاري إنشاء سؤال وصورة فريدة";
pub const IMAGE_ALT: &str = "سؤال عن كرة القدم";

#[must_use]
pub fn score_label(score: u32) -> String {
    format!("النتيجة: {score}")
}
