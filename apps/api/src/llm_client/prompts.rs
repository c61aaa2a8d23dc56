// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Appended to every system instruction that expects a JSON reply.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Fills `{name}` placeholders in `template` in a single left-to-right pass.
///
/// Substituted values are never scanned again, so user text that happens to
/// contain a placeholder name reaches the model verbatim. Braces that do not
/// name a known placeholder (JSON schemas in the templates) are kept as-is.
pub fn render_prompt(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let hit = vars.iter().find(|(name, _)| {
            tail.strip_prefix(*name)
                .is_some_and(|after| after.starts_with('}'))
        });
        match hit {
            Some((name, value)) => {
                out.push_str(value);
                rest = &tail[name.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prompt_fills_placeholders() {
        let rendered = render_prompt("A:\n{a}\nB:\n{b}", &[("a", "one"), ("b", "two")]);
        assert_eq!(rendered, "A:\none\nB:\ntwo");
    }

    #[test]
    fn test_render_prompt_keeps_unknown_braces() {
        let rendered = render_prompt(r#"{"score": 1} {x} {missing}"#, &[("x", "y")]);
        assert_eq!(rendered, r#"{"score": 1} y {missing}"#);
    }

    #[test]
    fn test_render_prompt_does_not_rescan_values() {
        let rendered = render_prompt(
            "{text}|{json}",
            &[("text", "uses {json} and {text}"), ("json", "[]")],
        );
        assert_eq!(rendered, "uses {json} and {text}|[]");
    }
}
