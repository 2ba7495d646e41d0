//! Fixed prompts and output schema for football trivia generation.

use serde_json::{Value, json};

/// Instruction sent to the text model. Question and options are Arabic; the
/// image prompt is a short English description.
pub const QUIZ_PROMPT: &str = "\
أنت خبير في كرة القدم. أنشئ سؤالاً واحداً صعبًا ومثيرًا للاهتمام حول كرة القدم.
يجب أن يكون السؤال باللغة العربية.
قدم ثلاثة خيارات للإجابة، واحد منها فقط صحيح.
حدد الإجابة الصحيحة.
أيضًا، قدم وصفًا باللغة الإنجليزية من 5 إلى 10 كلمات يمكن استخدامه كموجه لتوليد صورة فنية تعبر عن السؤال.
أريد أن تكون الإجابة بتنسيق JSON حصريًا. لا تقم بتضمين أي نص قبل أو بعد كائن JSON.
";

pub const RESPONSE_MIME_TYPE: &str = "application/json";

/// Appended to every image prompt.
pub const IMAGE_STYLE_SUFFIX: &str = "dramatic, artistic, high detail";

pub const IMAGE_COUNT: u32 = 1;
pub const IMAGE_ASPECT_RATIO: &str = "16:9";

/// Output schema the text model must follow.
#[must_use]
pub fn quiz_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "question": {
                "type": "STRING",
                "description": "سؤال كرة القدم باللغة العربية."
            },
            "options": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "minItems": 3,
                "maxItems": 3,
                "description": "مجموعة من 3 إجابات محتملة باللغة العربية."
            },
            "correctAnswer": {
                "type": "STRING",
                "description": "الإجابة الصحيحة من بين الخيارات باللغة العربية."
            },
            "imagePrompt": {
                "type": "STRING",
                "description": "موجه قصير وفني باللغة الإنجليزية لنموذج توليد الصور."
            }
        },
        "required": ["question", "options", "correctAnswer", "imagePrompt"]
    })
}

/// Full prompt for the image model.
#[must_use]
pub fn styled_image_prompt(image_prompt: &str) -> String {
    format!("{}, {IMAGE_STYLE_SUFFIX}", image_prompt.trim())
}
