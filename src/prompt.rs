use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// The four career tools. Wire names match the public API.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    ResumeBullets,
    CoverLetter,
    InterviewPrep,
    Linkedin,
}

// System + user message pair sent to the completion upstream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

// Per-tool configuration record: instruction builder plus completion
// parameters. New tools get a new record, the handler stays untouched.
pub struct ToolDef {
    system: fn(&HashMap<String, String>) -> String,
    pub max_tokens: u32,
    pub temperature: f32,
}

const RESUME_BULLETS: ToolDef = ToolDef {
    system: resume_bullets_system,
    max_tokens: 700,
    temperature: 0.7,
};

const COVER_LETTER: ToolDef = ToolDef {
    system: cover_letter_system,
    max_tokens: 900,
    temperature: 0.7,
};

const INTERVIEW_PREP: ToolDef = ToolDef {
    system: interview_prep_system,
    max_tokens: 1200,
    temperature: 0.7,
};

const LINKEDIN: ToolDef = ToolDef {
    system: linkedin_system,
    max_tokens: 900,
    temperature: 0.7,
};

impl Tool {
    pub fn def(self) -> &'static ToolDef {
        match self {
            Tool::ResumeBullets => &RESUME_BULLETS,
            Tool::CoverLetter => &COVER_LETTER,
            Tool::InterviewPrep => &INTERVIEW_PREP,
            Tool::Linkedin => &LINKEDIN,
        }
    }
}

// Builds the message pair for a career tool. Pure and deterministic:
// same (tool, input, options) always yields the same prompt.
pub fn build(tool: Tool, input: &str, options: &HashMap<String, String>) -> Prompt {
    Prompt {
        system: (tool.def().system)(options),
        user: input.trim().to_string(),
    }
}

// (value, guideline) tables per option axis. The first entry is the
// documented default; unknown or missing values fall back to it.

const BULLET_STYLES: &[(&str, &str)] = &[
    (
        "achievement",
        "Lead every bullet with a concrete, quantified outcome. Surface numbers, percentages, and scale wherever the experience supports them.",
    ),
    (
        "technical",
        "Emphasize technologies, architecture, and engineering depth. Name the stack and the technical problems solved.",
    ),
    (
        "leadership",
        "Emphasize ownership, team leadership, mentoring, and cross-functional coordination.",
    ),
    (
        "creative",
        "Emphasize campaigns, audience growth, and brand impact, with an energetic voice.",
    ),
];

const LETTER_TONES: &[(&str, &str)] = &[
    (
        "professional",
        "Keep the tone polished and businesslike, confident without overselling.",
    ),
    (
        "enthusiastic",
        "Let genuine excitement for the role and the company come through in every paragraph.",
    ),
    (
        "confident",
        "Be direct and assertive about fit and impact. No hedging language.",
    ),
    (
        "conversational",
        "Write warmly and naturally, like a thoughtful note to a future colleague.",
    ),
];

const QUESTION_TYPES: &[(&str, &str)] = &[
    (
        "mixed",
        "Mix behavioral and technical questions roughly evenly.",
    ),
    (
        "behavioral",
        "Behavioral questions only. Shape every sample answer with the STAR method (Situation, Task, Action, Result).",
    ),
    (
        "technical",
        "Technical questions only, probing hands-on depth for the role.",
    ),
    (
        "situational",
        "Situational and case-style questions that test judgment in realistic scenarios.",
    ),
];

const LINKEDIN_SECTIONS: &[(&str, &str)] = &[
    (
        "all",
        "Produce the full profile: Headline, About, and Experience Summary, in that order, each under a plain-text header.",
    ),
    (
        "headline",
        "Produce only the Headline: one line, under 220 characters, keyword-rich.",
    ),
    (
        "about",
        "Produce only the About section: three short first-person paragraphs.",
    ),
    (
        "summary",
        "Produce only the Experience Summary: 3-5 tight sentences covering the most recent role.",
    ),
];

fn lookup<'t>(table: &'t [(&str, &str)], value: Option<&str>) -> &'t str {
    value
        .and_then(|v| table.iter().find(|(key, _)| *key == v))
        .map_or(table[0].1, |(_, guideline)| *guideline)
}

fn resume_bullets_system(options: &HashMap<String, String>) -> String {
    let style = lookup(BULLET_STYLES, options.get("style").map(String::as_str));
    let title = options
        .get("jobTitle")
        .map_or("the role described below", String::as_str);

    format!(
        "You are an expert resume writer who crafts ATS-friendly bullet points.\n\
         The candidate's role: {title}.\n\n\
         {style}\n\n\
         CRITICAL RULES:\n\
         - Write 4-6 bullet points based on the experience the user describes\n\
         - Start each bullet with a strong action verb, no first-person pronouns\n\
         - Keep each bullet under 30 words\n\
         - Output ONLY the bullet points, one per line, each starting with \"- \". No headings, no commentary."
    )
}

fn cover_letter_system(options: &HashMap<String, String>) -> String {
    let tone = lookup(LETTER_TONES, options.get("tone").map(String::as_str));
    let title = options
        .get("jobTitle")
        .map_or("the advertised position", String::as_str);
    let company = options.get("company").map_or("the company", String::as_str);

    format!(
        "You are an expert career coach who writes compelling cover letters.\n\
         The candidate is applying for: {title} at {company}.\n\n\
         {tone}\n\n\
         CRITICAL RULES:\n\
         - Write 3-4 paragraphs, 250-350 words total\n\
         - Open with a hook tied to the role, close with a clear call to action\n\
         - Work the candidate's background in naturally, never as a list\n\
         - Output ONLY the letter itself, from greeting to sign-off. No addresses, no commentary."
    )
}

fn interview_prep_system(options: &HashMap<String, String>) -> String {
    let kind = lookup(
        QUESTION_TYPES,
        options.get("questionType").map(String::as_str),
    );
    let title = options
        .get("jobTitle")
        .map_or("the role described below", String::as_str);

    format!(
        "You are an experienced interviewer and hiring coach.\n\
         Generate realistic interview questions for: {title}.\n\n\
         {kind}\n\n\
         CRITICAL RULES:\n\
         - Produce exactly 6 questions, each with a strong sample answer\n\
         - Format each block as \"Q: ...\" then \"A: ...\", separated by a blank line\n\
         - Keep each sample answer under 120 words\n\
         - Output ONLY the Q/A blocks, no introduction or closing remarks."
    )
}

fn linkedin_system(options: &HashMap<String, String>) -> String {
    let section = lookup(LINKEDIN_SECTIONS, options.get("section").map(String::as_str));
    let role = options
        .get("currentRole")
        .map_or("the member's role", String::as_str);

    format!(
        "You are a LinkedIn profile expert who optimizes profiles to attract recruiters.\n\
         The member's current or target role: {role}.\n\n\
         {section}\n\n\
         CRITICAL RULES:\n\
         - Weave in the keywords recruiters search for this role\n\
         - Keep the voice first-person and specific\n\
         - Output ONLY the requested content, no commentary."
    )
}

// Naming variant. Style guidelines mirror the product's style picker;
// the first entry is the fallback for unknown styles.

pub const NAME_STYLES: &[(&str, &str)] = &[
    (
        "brandable",
        "Create unique, invented words or creative combinations that feel premium and brandable (like Spotify, Shopify, Figma).",
    ),
    (
        "professional",
        "Use real, established-sounding words that convey trust and authority (like Accenture, Deloitte, Meridian).",
    ),
    (
        "playful",
        "Use fun, catchy, memorable names with personality (like Bumble, Wobble, Zappy).",
    ),
    (
        "modern",
        "Create sleek, minimal, one or two-syllable names that feel modern (like Vercel, Notion, Linear).",
    ),
    (
        "short",
        "Names must be 3-6 characters maximum. Short, punchy, easy to type (like Uber, Bolt, Hive).",
    ),
];

pub const NAME_COUNT: usize = 8;
pub const NAMING_MAX_TOKENS: u32 = 1500;
pub const NAMING_TEMPERATURE: f32 = 0.9;

pub fn build_naming(query: &str, style: &str) -> Prompt {
    let guideline = lookup(NAME_STYLES, Some(style));

    let system = format!(
        "You are a world-class brand naming expert. Generate {NAME_COUNT} unique business name ideas based on the user's description.\n\n\
         {guideline}\n\n\
         CRITICAL RULES:\n\
         - Each name should be 1-2 words maximum\n\
         - Names must be easy to pronounce and spell\n\
         - Suggest the .com domain for each name (lowercase, no spaces/hyphens)\n\
         - Write a short tagline (under 10 words) for each\n\
         - Output ONLY valid JSON array, no markdown, no code blocks\n\n\
         Output format:\n\
         [{{\"name\":\"BrandName\",\"domain\":\"brandname.com\",\"tagline\":\"Short catchy tagline here\"}}]"
    );

    Prompt {
        system,
        user: query.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn identical_inputs_yield_identical_prompts() {
        let opts = options(&[("style", "technical"), ("jobTitle", "Backend Engineer")]);
        let a = build(Tool::ResumeBullets, "Built a dashboard", &opts);
        let b = build(Tool::ResumeBullets, "Built a dashboard", &opts);
        assert_eq!(a, b);
    }

    #[test]
    fn options_are_interpolated_into_the_system_message() {
        let opts = options(&[("jobTitle", "Staff Engineer"), ("company", "Initech")]);
        let prompt = build(Tool::CoverLetter, "10 years of experience", &opts);
        assert!(prompt.system.contains("Staff Engineer"));
        assert!(prompt.system.contains("Initech"));
        assert_eq!(prompt.user, "10 years of experience");
    }

    #[test]
    fn unknown_style_falls_back_to_the_default() {
        let with_unknown = build(
            Tool::ResumeBullets,
            "input",
            &options(&[("style", "baroque")]),
        );
        let with_default = build(
            Tool::ResumeBullets,
            "input",
            &options(&[("style", "achievement")]),
        );
        assert_eq!(with_unknown.system, with_default.system);
    }

    #[test]
    fn missing_options_do_not_fail() {
        let prompt = build(Tool::InterviewPrep, "entry level, knows SQL", &HashMap::new());
        assert!(prompt.system.contains("Mix behavioral and technical"));
    }

    #[test]
    fn every_tool_demands_bare_output() {
        for tool in [
            Tool::ResumeBullets,
            Tool::CoverLetter,
            Tool::InterviewPrep,
            Tool::Linkedin,
        ] {
            let prompt = build(tool, "input", &HashMap::new());
            assert!(prompt.system.contains("Output ONLY"), "{tool:?}");
        }
    }

    #[test]
    fn user_input_is_trimmed() {
        let prompt = build(Tool::Linkedin, "  senior dev  \n", &HashMap::new());
        assert_eq!(prompt.user, "senior dev");
    }

    #[test]
    fn naming_prompt_carries_the_style_guideline() {
        let prompt = build_naming("a coffee subscription service", "playful");
        assert!(prompt.system.contains("Bumble"));
        assert!(prompt.system.contains("8 unique business name ideas"));
        assert_eq!(prompt.user, "a coffee subscription service");
    }

    #[test]
    fn naming_unknown_style_falls_back_to_brandable() {
        let unknown = build_naming("query", "mysterious");
        let brandable = build_naming("query", "brandable");
        assert_eq!(unknown.system, brandable.system);
    }

    #[test]
    fn tool_wire_names_are_kebab_case() {
        let tool: Tool = serde_json::from_str("\"resume-bullets\"").unwrap();
        assert_eq!(tool, Tool::ResumeBullets);
        let tool: Tool = serde_json::from_str("\"cover-letter\"").unwrap();
        assert_eq!(tool, Tool::CoverLetter);
        assert!(serde_json::from_str::<Tool>("\"fortune-teller\"").is_err());
    }
}
