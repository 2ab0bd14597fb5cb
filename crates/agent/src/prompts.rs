//! Prompt templates for the component and BOM suggestion flows.

use crate::guardrails::BomUpload;

/// Characters of BOM text forwarded to the model.
pub const MAX_BOM_PROMPT_CHARS: usize = 12_000;

pub fn build_component_prompt(description: &str) -> String {
    format!(
        r#"You are an electronic component selection assistant.

REQUIREMENTS:
{description}

Recommend one specific, currently produced part that satisfies the requirements.
Answer with a JSON object in exactly this format:
{{
  "recommendation": "manufacturer part number and short name",
  "reasoning": "why this part fits, including key parameters and any trade-offs"
}}

Return ONLY valid JSON, no additional text."#
    )
}

pub fn build_bom_prompt(upload: &BomUpload) -> String {
    let contents = bom_excerpt(upload);
    format!(
        r#"You are an electronic component sourcing assistant reviewing a bill of materials.

REQUEST:
{description}

BILL OF MATERIALS ({mime}):
{contents}

Suggest the single most useful component change or addition for this BOM.
Answer with a JSON object in exactly this format:
{{
  "suggested_component": "manufacturer part number and short name",
  "reasoning": "which BOM line it affects and why"
}}

Return ONLY valid JSON, no additional text."#,
        description = upload.description,
        mime = upload.mime_type,
    )
}

fn bom_excerpt(upload: &BomUpload) -> String {
    if !upload.is_textual() {
        return format!(
            "[binary spreadsheet, {} bytes; rely on the request text for part details]",
            upload.bytes.len()
        );
    }

    let text = String::from_utf8_lossy(&upload.bytes);
    let mut excerpt: String = text.chars().take(MAX_BOM_PROMPT_CHARS).collect();
    if text.chars().count() > MAX_BOM_PROMPT_CHARS {
        excerpt.push_str("\n[truncated]");
    }
    excerpt
}

/// Pull the JSON object out of a model reply that may be wrapped in a code
/// fence or surrounded by prose.
pub fn extract_json(reply: &str) -> &str {
    let text = reply.trim();

    let unfenced = match text.find("```") {
        Some(start) => {
            let body = &text[start + 3..];
            let body = body.strip_prefix("json").unwrap_or(body);
            match body.find("```") {
                Some(end) => &body[..end],
                None => body,
            }
        }
        None => text,
    };

    match (unfenced.find('{'), unfenced.rfind('}')) {
        (Some(start), Some(end)) if start < end => &unfenced[start..=end],
        _ => unfenced.trim(),
    }
}
