use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default lookup preprocessing
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // NFKC folds compatibility ideographs and half-width kana into
        // the blocks the classifier knows about
        let text: String = text.nfkc().collect();

        text.replace(['\n', '\r'], "").trim().to_string()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
