use crate::types::{ExperienceLevel, GenerationInput};

// Decoding reads the same profile, so a block requested here is required in the reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProfile {
    pub market_context: bool,
    pub strategy_context: bool,
    pub competitive_analysis: bool,
    pub closing_instruction: &'static str,
}

const BEGINNER: LevelProfile = LevelProfile {
    market_context: false,
    strategy_context: false,
    competitive_analysis: false,
    closing_instruction: "Provide simple explanations suitable for someone new to tokenomics.",
};

const INTERMEDIATE: LevelProfile = LevelProfile {
    market_context: true,
    strategy_context: false,
    competitive_analysis: false,
    closing_instruction: "Include more detailed analysis and considerations in your response.",
};

const ADVANCED: LevelProfile = LevelProfile {
    market_context: true,
    strategy_context: true,
    competitive_analysis: true,
    closing_instruction: "Provide advanced insights, including detailed competitive analysis and regulatory considerations.",
};

impl ExperienceLevel {
    pub fn profile(self) -> &'static LevelProfile {
        match self {
            ExperienceLevel::Beginner => &BEGINNER,
            ExperienceLevel::Intermediate => &INTERMEDIATE,
            ExperienceLevel::Advanced => &ADVANCED,
        }
    }
}

const SCENARIO_SCHEMA: &str = r#"{
  "projectName": "Project Name",
  "blockchainPlatform": "Blockchain Platform",

  "name": "Scenario Name",
  "tokenDistribution": [
    { "category": "Category Name", "percentage": number }
  ],
  "initialTokenPrice": number,
  "vestingSchedule": {
    "team": "Description",
    "advisors": "Description"
  },
  "projections": {
    "circulatingSupply": [
      { "date": "YYYY-Q1", "amount": number }
    ],
    "price": [
      { "date": "YYYY-Q1", "price": number }
    ],
    "marketCap": [
      { "date": "YYYY-Q1", "marketCap": number }
    ]
  },
  "tokenUtilization": [
    { "useCase": "Use Case", "description": "Brief description" }
  ],
  "riskAssessment": [
    { "factor": "Risk Factor", "level": number }
  ],
  "analysis": "Brief analysis of the tokenomics scenario"
"#;

const COMPETITIVE_SCHEMA: &str = r#",
  "competitiveAnalysis": {
    "competitors": [
      {
        "name": "Competitor Name",
        "description": "Brief description of the competitor's project",
        "tokenomics": {
          "totalSupply": number,
          "initialPrice": number,
          "distribution": [
            { "category": "Category Name", "percentage": number }
          ]
        },
        "strengths": ["Strength 1", "Strength 2"],
        "weaknesses": ["Weakness 1", "Weakness 2"]
      }
    ],
    "comparisonAnalysis": "Brief analysis comparing the generated tokenomics to competitors"
  }
"#;

const JSON_ONLY: &str = "Provide the response as a valid JSON object without any additional text or explanations outside the JSON structure.";

pub fn build_tokenomics_prompt(input: &GenerationInput, level: ExperienceLevel) -> String {
    let profile = level.profile();

    let mut prompt = format!(
        r#"
Generate a tokenomics scenario for a blockchain project with the following details:

Project Name: {}
Project Concept: {}
Project Stage: {}
"#,
        input.project_name, input.project_concept, input.project_stage
    );

    if profile.market_context {
        prompt.push_str(&format!(
            r#"
Total Token Supply: {}
Blockchain Platform: {}
Target Audience: {}
"#,
            format_grouped(input.total_supply),
            input.blockchain_platform,
            input.target_audience.join(",")
        ));
    }

    if profile.strategy_context {
        prompt.push_str(&format!(
            r#"
Project Goals: {}
Competitor Analysis: {}
Regulatory Considerations: {}
"#,
            input.project_goals.join(","),
            input.competitor_analysis.join(","),
            input.regulatory_considerations.join(",")
        ));
    }

    prompt.push_str("\nBased on this information, provide a JSON object with the following structure:\n\n");
    prompt.push_str(SCENARIO_SCHEMA);
    if profile.competitive_analysis {
        prompt.push_str(COMPETITIVE_SCHEMA);
    }
    prompt.push_str("\n}\n\nEnsure all numbers are realistic and based on the provided project details. Keep descriptions concise. ");
    prompt.push_str(profile.closing_instruction);
    prompt.push(' ');
    prompt.push_str(JSON_ONLY);

    prompt
}

pub fn build_market_data_prompt(project_name: &str, blockchain_platform: &str) -> String {
    format!(
        r#"Provide a market sentiment analysis and general market conditions for launching a new crypto project named {name} on the {platform} platform. Include the following in your response:
  1. Overall crypto market sentiment (bullish, bearish, or neutral)
  2. General market conditions for the {platform} ecosystem
  3. Average 24h trading volume for new tokens on {platform} in the last month
  4. Average initial market cap for new tokens on {platform} in the last month
  5. Estimated fair launch price range for a new token in the current market

  Format the response ONLY as a valid JSON object with the following structure:
  {{
    "marketSentiment": "bullish" | "bearish" | "neutral" (current market sentiment for the {platform} ecosystem),
    "ecosystemCondition": current market conditions for the {platform} ecosystem,
    "avgNewTokenVolume": number,
    "avgNewTokenMarketCap": number,
    "estimatedPriceRange": {{
      "min": number,
      "max": number
    }},
    "timestamp": (current time in "YYYY-MM-DDTHH:mm:ssZ" format)
  }}
  Ensure all numerical values are realistic. Do not include any explanatory text outside of the JSON object."#,
        name = project_name,
        platform = blockchain_platform
    )
}

pub fn build_competitive_analysis_prompt(project_name: &str, competitors: &[String]) -> String {
    format!(
        r#"Provide a competitive analysis for the crypto project {} compared to {}. Include market cap, price, and volume for each.

Format the response as a JSON object with the following structure:
{{
  "projectData": {{ "name": "{}", "marketCap": number, "price": number, "volume": number }},
  "competitors": [
    {{ "name": "Competitor Name", "marketCap": number, "price": number, "volume": number }}
  ]
}}

{}"#,
        project_name,
        competitors.join(", "),
        project_name,
        JSON_ONLY
    )
}

pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rendered = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(rendered.len() + int_part.len() / 3 + 1);
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}
