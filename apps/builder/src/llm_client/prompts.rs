// Shared prompt fragments. Each adapter keeps its own prompts.rs alongside it.

/// System instruction sent with every request.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only, matching the provided response schema. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
