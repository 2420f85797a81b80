//! Prompt building and chat message types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// Message content: plain text, or multi-part for vision requests
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

/// One part of a multi-part message
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
}

/// Chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: MessageContent,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: MessageContent::Text(content.into()),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Text(content.into()),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: MessageContent::Text(content.into()),
        }
    }

    /// A user turn carrying prompt text plus one image as a data URI
    pub fn user_with_image(text: impl Into<String>, data_uri: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Parts(vec![
                ContentPart::Text { text: text.into() },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: data_uri.into(),
                    },
                },
            ]),
        }
    }
}

/// Safe-response script categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptKind {
    DeclineMoney,
    VerifyIdentity,
    BreakContact,
}

/// Prompt templates for the analysis service
pub struct Prompts;

impl Prompts {
    /// Maximum conversation excerpt embedded in the enrichment prompt
    const EXCERPT_CHARS: usize = 2000;

    /// Enrichment prompt embedding detected pattern/flag names and a
    /// truncated conversation excerpt. Instructs the model to return a
    /// single bare JSON object; markdown fences are explicitly
    /// forbidden (and stripped anyway, see `sanitize`).
    pub fn enrichment(pattern_names: &[&str], flag_names: &[&str], text: &str) -> String {
        format!(
            r#"You are a romance scam detection expert. Analyze this conversation for scam indicators.

Detected Patterns: {patterns:?}
Detected Financial Flags: {flags:?}

Conversation excerpt: {excerpt}

Provide a structured analysis in valid JSON format. Do not use Markdown code blocks.
Structure:
{{
    "insights": [
        {{
            "type": "warning/danger/info",
            "title": "Short Title",
            "description": "2 sentences max explanation"
        }}
    ],
    "timeline": [
        {{
            "phase": "Day/Week [X]",
            "event": "Event Description",
            "risk_score": [0-100 estimate]
        }}
    ],
    "scam_classification": {{
        "type": "One of: Military Romance, Crypto Investment / Pig Butchering, Medical Emergency, Oil Rig / Engineer, Inheritance Scam, None/Unknown",
        "description": "1 sentence explanation of this specific variant.",
        "avg_loss": "$[Amount based on FTC data for this type, e.g. $50,000 for Crypto, $2,500 for general romance]",
        "probability": "[Low/Medium/High]"
    }}
}}
If the text is short or no timeline can be inferred, provide a best-guess timeline or a single 'Current State' entry."#,
            patterns = pattern_names,
            flags = flag_names,
            excerpt = truncate_chars(text, Self::EXCERPT_CHARS),
        )
    }

    /// Forensic prompt for the screenshot analysis path
    pub fn image_analysis() -> &'static str {
        r#"ACT AS A CYBERSECURITY EXPERT SPECIALIZING IN SOCIAL ENGINEERING AND ROMANCE SCAMS.

YOUR TASK:
Perform a deep forensic analysis of the attached conversation screenshot. Do not just summarize; investigate the text for psychological manipulation and fraud indicators.

STEP 1: TEXT EXTRACTION & CONTEXT
- Read every message in the image.
- Identify the relationship phase (Introduction, Grooming, or Extraction).
- Note the time gaps between messages if visible.

STEP 2: DETAILED PATTERN MATCHING
Look for these specific, subtle indicators:
- Love Bombing: Excessive compliments used too early to manufacture intimacy.
- The "Setup": A wealthy/noble profession combined with a remote location.
- The "Crisis": A sudden, urgent problem that only money can fix.
- Payment Methods: Specific requests for Bitcoin, Gift Cards, Zelle, or CashApp.
- Grammar/Tone Mismatch: Does the language match the claimed persona?

STEP 3: ANALYSIS OUTPUT
You MUST respond in valid JSON format. Do not use Markdown code blocks.
Structure:
{
    "risk_score": [0-100],
    "scam_type": "[Type or 'None']",
    "red_flags": [
        {"title": "[Short Title]", "description": "[Short explanation < 15 words]"}
    ],
    "timeline": [
        {"phase": "Day/Week [X]", "event": "[Key Event Description]", "risk_score": [0-100]}
    ],
    "verdict": "[1 sentence summary]"
}"#
    }

    /// Script-generation prompt for a category, with conversation
    /// context truncated to 500 characters
    pub fn script(kind: ScriptKind, context: &str) -> String {
        let task = match kind {
            ScriptKind::DeclineMoney => {
                "Generate 3 polite but strict scripts to decline a request for money in a romance scam context. Do not be accusatory, just say no clearly. Keep them short (under 20 words)."
            }
            ScriptKind::VerifyIdentity => {
                "Generate 3 scripts to ask for a video call or specific photo verification to prove identity. Be casual but insistent. Keep them short."
            }
            ScriptKind::BreakContact => {
                "Generate 3 scripts to safely end contact with a potential scammer without escalating the situation. Be boring and firm. Keep them short."
            }
        };

        format!(
            r#"Context of conversation: "{context}..."

Task: {task}

Response Format:
Return ONLY a valid JSON array of strings. Example: ["Script 1", "Script 2", "Script 3"]"#,
            context = truncate_chars(context, 500),
            task = task,
        )
    }

    /// System prompt for the advisor chat endpoint
    pub fn advisor_system() -> &'static str {
        r#"You are a slightly skeptical but helpful cybersecurity expert called CupidSecure AI.

Your Goal: Help users quickly identify if they are being scammed.
Tone: Direct, Professional, Empathetic but Concise.

FORMATTING RULES:
1. USE SHORT PARAGRAPHS (Max 2 sentences).
2. USE BULLET POINTS for lists.
3. USE **BOLD** for key terms or warnings.
4. Add empty lines between paragraphs for readability.
5. Keep total response under 150 words unless asked for a detailed explanation.

Never shame victims. Be practical."#
    }
}

/// Truncate to at most `max` characters without splitting a UTF-8
/// character.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
