use rand::Rng;

use crate::domain::{SiteOrigin, SlotCount, SlotIndex, select_slot};

const TITLE_BASE: &str = "Shared link preview: ";

// The description doubles as an escaping exercise for crawlers and
// validators, so it deliberately carries every printable special character.
const DESCRIPTION_BASE: &str = "Special characters sample: & < > \" ' ! # $ % ( ) * + , - . / : ; = ? @ [ ] ^ _ { | } ~ ";

const FLAIR_LEN: usize = 10;

// Decorative pool: hiragana, katakana, and a handful of common kanji.
const FLAIR_POOL: &str = "あいうえおかきくけこさしすせそたちつてとなにぬねの\
はひふへほまみむめもやゆよらりるれろわをん\
アイウエオカキクケコサシスセソタチツテトナニヌネノ\
ハヒフヘホマミムメモヤユヨラリルレロワヲン\
日月火水木金土山川田東京大阪愛楽速静安新古";

/// Escape HTML special characters for safe rendering.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Fresh decorative string. Non-deterministic on purpose: every render of
/// the same URL gets varied preview text, while the image stays pinned to
/// the identifier.
fn random_flair(len: usize) -> String {
    let pool: Vec<char> = FLAIR_POOL.chars().collect();
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect()
}

/// One fully composed preview document.
///
/// The slot (and therefore the image URL) is a pure function of `id2`;
/// title and description carry the per-render decorative string.
pub struct PreviewPage {
    pub title: String,
    pub description: String,
    pub page_url: String,
    pub image_url: String,
    pub slot: SlotIndex,
    pub image_file: String,
}

impl PreviewPage {
    pub fn compose(id1: &str, id2: &str, origin: &SiteOrigin, count: SlotCount) -> Self {
        let slot = select_slot(id2, count);
        let image_file = slot.file_name(count);
        let flair = random_flair(FLAIR_LEN);

        Self {
            title: format!("{TITLE_BASE}{flair}"),
            description: format!("{DESCRIPTION_BASE}{flair}"),
            page_url: origin.page_url(id1, id2),
            image_url: origin.image_url(&image_file),
            slot,
            image_file,
        }
    }

    /// Render the full HTML document. Every interpolated value goes
    /// through `html_escape`, whether it lands in an attribute or in text.
    pub fn render(&self) -> String {
        let title = html_escape(&self.title);
        let description = html_escape(&self.description);
        let page_url = html_escape(&self.page_url);
        let image_url = html_escape(&self.image_url);
        let image_file = html_escape(&self.image_file);

        let mut html = String::with_capacity(4096);
        html.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\" />\n");
        html.push_str("<title>");
        html.push_str(&title);
        html.push_str("</title>\n");
        html.push_str("<meta name=\"description\" content=\"");
        html.push_str(&description);
        html.push_str("\" />\n\n");

        html.push_str("<!-- OGP -->\n");
        html.push_str("<meta property=\"og:type\" content=\"website\">\n");
        html.push_str("<meta property=\"og:title\" content=\"");
        html.push_str(&title);
        html.push_str("\">\n");
        html.push_str("<meta property=\"og:description\" content=\"");
        html.push_str(&description);
        html.push_str("\">\n");
        html.push_str("<meta property=\"og:url\" content=\"");
        html.push_str(&page_url);
        html.push_str("\">\n");
        html.push_str("<meta property=\"og:image\" content=\"");
        html.push_str(&image_url);
        html.push_str("\">\n\n");

        html.push_str("<!-- Twitter cards -->\n");
        html.push_str("<meta name=\"twitter:card\" content=\"summary_large_image\">\n");
        html.push_str("</head>\n<body>\n");

        html.push_str(
            "<main style=\"min-height:100vh;display:flex;align-items:center;\
             justify-content:center;font-family:-apple-system,BlinkMacSystemFont,\
             Segoe UI,Roboto,Helvetica,Arial,sans-serif;background:#f5f5f5;\">\n",
        );
        html.push_str(
            "<div style=\"text-align:center;background:#fff;border-radius:16px;\
             padding:32px 40px;box-shadow:0 10px 30px rgba(0,0,0,0.08);max-width:640px;\">\n",
        );
        html.push_str("<h1 style=\"font-size:24px;margin-bottom:16px;\">");
        html.push_str(&title);
        html.push_str("</h1>\n");
        html.push_str("<p style=\"color:#555;margin-bottom:24px;\">");
        html.push_str(&description);
        html.push_str("</p>\n");
        html.push_str("<p style=\"font-size:14px;color:#888;\">");
        html.push_str("This page exists to be shared; crawlers read its preview card.<br />");
        html.push_str("URL: <code>");
        html.push_str(&page_url);
        html.push_str("</code></p>\n");
        html.push_str("<div style=\"margin-top:24px;\">\n");
        html.push_str("<img src=\"");
        html.push_str(&image_url);
        html.push_str("\" alt=\"OGP Image\" style=\"max-width:100%;border-radius:8px;\" />\n");
        html.push_str("<p style=\"margin-top:8px;font-size:12px;color:#666;\">Image #");
        html.push_str(&self.slot.to_string());
        html.push_str(" (/images/ogp/");
        html.push_str(&image_file);
        html.push_str(")</p>\n");
        html.push_str("</div>\n</div>\n</main>\n</body>\n</html>");

        html
    }
}
