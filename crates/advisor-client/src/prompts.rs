//! Prompt assembly for the advisor's two calls.

use common::{CommunityInfo, RecommendationRequest};

/// Prompt for expanding free-text interests into directory search keywords.
pub(crate) fn expansion_prompt(user_input: &str) -> String {
    format!(
        r#"Analyze this user input about their interests or problems: "{user_input}"

Generate 3-5 relevant search keywords or phrases that would help find appropriate online discussion communities.
Focus on:
- Main topics and themes
- Related communities
- Problem-solving contexts
- Hobby or interest areas

Return only the keywords/phrases, one per line, without explanations."#
    )
}

/// Prompt for selecting and justifying a subset of the candidate pool.
pub(crate) fn ranking_prompt(
    request: &RecommendationRequest,
    candidates: &[CommunityInfo],
) -> String {
    let candidate_list = candidates
        .iter()
        .map(|info| {
            format!(
                "- r/{}: {} ({} subscribers)",
                info.name, info.description, info.subscriber_count
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let problems = request
        .problems
        .as_deref()
        .map(|p| format!("- Problems/Challenges: {p}\n"))
        .unwrap_or_default();
    let preferences = request
        .preferences
        .as_deref()
        .map(|p| format!("- Preferences: {p}\n"))
        .unwrap_or_default();

    format!(
        r#"You are an expert helping users find relevant online discussion communities based on their interests and problems.

User Input:
- Interests: {interests}
{problems}{preferences}
Available Communities:
{candidate_list}

Please analyze the user's input and recommend the most relevant communities from the list above. Consider:
1. Direct topic matches
2. Community size and activity
3. Relevance to stated problems or interests
4. Potential for helpful discussions

Respond in JSON format with:
{{
  "communities": ["community1", "community2", ...],
  "reasoning": "Write a well-formatted explanation with each community recommendation on a new sentence. Mention specific communities using the format r/communityname. Explain why each recommended community is relevant to the user's interests.",
  "categories": ["category1", "category2", ...]
}}

IMPORTANT: In the reasoning field, write clear sentences separated by periods. Each sentence should explain one community recommendation. Use the exact format r/communityname when mentioning communities.

Limit recommendations to 5-8 most relevant communities."#,
        interests = request.interests,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn community(name: &str, subscribers: u64) -> CommunityInfo {
        CommunityInfo {
            name: name.to_string(),
            display_name: format!("r/{name}"),
            description: format!("{name} talk"),
            subscriber_count: subscribers,
            url: format!("https://reddit.com/r/{name}/"),
        }
    }

    #[test]
    fn test_ranking_prompt_lists_candidates() {
        let request = RecommendationRequest::new("photography");
        let prompt = ranking_prompt(&request, &[community("photography", 500_000)]);

        assert!(prompt.contains("- r/photography: photography talk (500000 subscribers)"));
        assert!(prompt.contains("- Interests: photography"));
    }

    #[test]
    fn test_ranking_prompt_omits_absent_optional_fields() {
        let request = RecommendationRequest::new("photography");
        let prompt = ranking_prompt(&request, &[]);
        assert!(!prompt.contains("Problems/Challenges"));
        assert!(!prompt.contains("- Preferences:"));
    }

    #[test]
    fn test_ranking_prompt_includes_optional_fields() {
        let mut request = RecommendationRequest::new("photography");
        request.problems = Some("blurry night shots".to_string());
        request.preferences = Some("beginner friendly".to_string());

        let prompt = ranking_prompt(&request, &[]);
        assert!(prompt.contains("- Problems/Challenges: blurry night shots"));
        assert!(prompt.contains("- Preferences: beginner friendly"));
    }

    #[test]
    fn test_expansion_prompt_embeds_input() {
        let prompt = expansion_prompt("landscape photography");
        assert!(prompt.contains("\"landscape photography\""));
    }
}
