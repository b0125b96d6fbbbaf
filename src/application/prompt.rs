//! Prompt sent to the content generator.
//!
//! Bump [`PROMPT_VERSION`] whenever the text changes so stored records can be
//! traced back to the instructions that produced them.

pub const PROMPT_VERSION: &str = "2025-06-01";

/// Asks for exactly one lesser-known, active tech startup as a JSON object.
pub const STARTUP_OF_THE_DAY_PROMPT: &str = r#"You curate Startup Dose, a site that features one promising technology startup every day.

Choose ONE startup that:
- works in technology (software, hardware, SaaS, AI, developer tools, fintech, and similar),
- is NOT large or famous (no household names such as Stripe, Airbnb, Dropbox, OpenAI, Meta or Google),
- is still operating as far as you know,
- is interesting enough for a daily spotlight.

Prefer a startup whose website you know and for which you know at least one real image URL.

Answer with a SINGLE JSON object containing these string fields:

- "name": the company name, e.g. "Acme AI".
- "website": the main website URL, e.g. "https://example.com".
- "cover_image": a direct, publicly reachable image URL you are highly confident exists. In order of preference: a founder photo, a product or brand image, a logo from the company website, a profile or header image from one of its social accounts. Never invent plausible-looking URLs. If you cannot give a verified image URL, use the website homepage URL.
- "description": one short paragraph (2 to 4 sentences) saying what the company does, who it is for, and why it is interesting. It should read well as a social media caption.
- "appeal": EXACTLY five HTML list items (<li>...</li>) with specific, compelling reasons we like this startup (traction, innovation, niche, team, product quality). Do NOT wrap them in <ul>.
- "linkedin": the LinkedIn page URL if you are reasonably confident it exists, otherwise "".
- "instagram": the Instagram profile URL if you are reasonably confident it exists, otherwise "".
- "facebook": the Facebook page URL if you are reasonably confident it exists, otherwise "".
- "twitter": the Twitter/X profile URL if you are reasonably confident it exists, otherwise "".

Formatting rules:
- Output MUST be valid JSON and nothing else.
- Do not wrap the JSON in backticks or add commentary.
- Exactly one startup per response.
- "appeal" is one string with exactly five <li> items and no <ul> wrapper.

Now pick a lesser-known, still-active tech startup and return the JSON object."#;
