// Resume analysis LLM prompt templates.
// The JSON shapes below must stay in sync with analysis::models.

/// System prompt for skill extraction. `{json_only}` is replaced at call time.
pub const SKILL_EXTRACT_SYSTEM: &str = "\
You are an HR assistant. Your task is to summarize the resume and extract \
the important skills, contact details, education and experience from the text. \
{json_only}";

/// Skill extraction prompt. Replace `{resume_text}` before sending.
pub const SKILL_EXTRACT_PROMPT: &str = r#"Summarize and extract skills from this resume.

Return a JSON object with this EXACT schema (no extra fields):
{
  "all_skills": [
    {"skill_name": "Python", "type": "programming language"}
  ],
  "all_contacts": [
    {"contact": "jane@example.com"}
  ],
  "all_education": [
    {"education": "BSc Computer Science", "institution": "State University", "year": 2019}
  ],
  "all_experience": [
    {"experience": "Backend engineer at Acme, 3 years, built billing APIs"}
  ]
}

RULES:
1. "all_skills" must list every skill found; it must not be empty if the resume names any skill
2. Use null for a section the resume does not contain at all, [] if the section exists but is empty
3. "year" is an integer (graduation or expected year)

RESUME:
{resume_text}"#;

/// System prompt for gap analysis. `{json_only}` is replaced at call time.
pub const GAP_ANALYSIS_SYSTEM: &str = "\
You are a Senior Career Counselor. Analyze the resume text and extracted skills. \
1. Identify the professional domain (e.g. 'Full Stack Developer', 'Data Analyst'). \
2. Compare the resume against industry standards for that domain. \
3. Assign a score (0-100) based on completeness and quality. \
4. List critical missing skills. \
5. Recommend specific courses or actions. \
{json_only}";

/// Gap analysis prompt. Replace `{resume_text}` and `{skills_json}` before sending.
pub const GAP_ANALYSIS_PROMPT: &str = r#"Analyze this resume for its professional domain.

Return a JSON object with this EXACT schema (no extra fields):
{
  "identified_domain": "Data Analyst",
  "score": 68,
  "missing_skills": ["Tableau"],
  "recommended_courses": ["Google Data Analytics Certificate"]
}

"score" is an integer from 0 to 100.

RESUME TEXT:
{resume_text}

EXTRACTED SKILLS:
{skills_json}"#;
