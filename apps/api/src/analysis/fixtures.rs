//! Test fixtures: a hand-assembled single-page PDF and canned model replies.

use serde_json::{json, Value};

/// Builds a valid one-page PDF showing `text` in Helvetica.
/// `text` must not contain parentheses or backslashes.
pub fn single_page_pdf(text: &str) -> Vec<u8> {
    let content = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
         /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
            .to_string(),
        format!(
            "<< /Length {} >>\nstream\n{content}\nendstream",
            content.len()
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica \
         /Encoding /WinAnsiEncoding >>"
            .to_string(),
    ];

    let mut pdf = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (index, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.push_str(&format!("{} 0 obj\n{body}\nendobj\n", index + 1));
    }

    let xref_offset = pdf.len();
    pdf.push_str(&format!("xref\n0 {}\n", objects.len() + 1));
    pdf.push_str("0000000000 65535 f \n");
    for offset in offsets {
        pdf.push_str(&format!("{offset:010} 00000 n \n"));
    }
    pdf.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
        objects.len() + 1
    ));
    pdf.into_bytes()
}

pub fn profile_reply() -> Value {
    json!({
        "all_skills": [
            {"skill_name": "Python", "type": "programming language"},
            {"skill_name": "SQL", "type": "query language"}
        ],
        "all_contacts": null,
        "all_education": [],
        "all_experience": [{"experience": "5 years experience"}]
    })
}

pub fn analysis_reply(score: i64) -> Value {
    json!({
        "identified_domain": "Data Analyst",
        "score": score,
        "missing_skills": ["Tableau", "Statistics"],
        "recommended_courses": ["Google Data Analytics Certificate"]
    })
}
