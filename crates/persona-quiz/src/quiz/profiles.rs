use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Static advice shown to respondents whose dominant trait matches the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationProfile {
    pub title: String,
    pub description: String,
    pub suggestions: Vec<String>,
}

impl RecommendationProfile {
    fn new(title: &str, description: &str, suggestions: [&str; 4]) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Trait-keyed profiles plus the fallback used for any other trait.
#[derive(Debug, Clone)]
pub struct ProfileTable {
    profiles: Vec<(&'static str, RecommendationProfile)>,
    fallback: RecommendationProfile,
}

impl ProfileTable {
    pub fn new(
        profiles: Vec<(&'static str, RecommendationProfile)>,
        fallback: RecommendationProfile,
    ) -> Self {
        Self { profiles, fallback }
    }

    pub fn standard() -> &'static ProfileTable {
        static STANDARD: OnceLock<ProfileTable> = OnceLock::new();
        STANDARD.get_or_init(standard_table)
    }

    /// Profile registered for `trait_tag`, if any.
    pub fn get(&self, trait_tag: &str) -> Option<&RecommendationProfile> {
        self.profiles
            .iter()
            .find(|(tag, _)| *tag == trait_tag)
            .map(|(_, profile)| profile)
    }

    pub fn profile_for(&self, trait_tag: &str) -> &RecommendationProfile {
        self.get(trait_tag).unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &RecommendationProfile {
        &self.fallback
    }

    pub fn trait_tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.profiles.iter().map(|(tag, _)| *tag)
    }
}

fn standard_table() -> ProfileTable {
    let profiles = vec![
        (
            "leader",
            RecommendationProfile::new(
                "Natural Leader",
                "You have strong leadership qualities and excel at organizing and motivating others.",
                [
                    "Consider pursuing management or executive roles",
                    "Develop your strategic thinking skills",
                    "Practice public speaking and presentation skills",
                    "Learn about team building and organizational psychology",
                ],
            ),
        ),
        (
            "technical",
            RecommendationProfile::new(
                "Technical Expert",
                "You enjoy diving deep into technical challenges and building solutions.",
                [
                    "Focus on advanced programming languages and frameworks",
                    "Consider specializing in emerging technologies like AI or blockchain",
                    "Build a strong portfolio of technical projects",
                    "Contribute to open-source projects to showcase your skills",
                ],
            ),
        ),
        (
            "creative",
            RecommendationProfile::new(
                "Creative Innovator",
                "You bring fresh perspectives and innovative solutions to challenges.",
                [
                    "Explore design thinking methodologies",
                    "Develop skills in UI/UX design and user research",
                    "Consider roles in product design or creative direction",
                    "Build a portfolio showcasing your creative projects",
                ],
            ),
        ),
        (
            "collaborative",
            RecommendationProfile::new(
                "Team Player",
                "You excel at working with others and building strong team relationships.",
                [
                    "Develop your communication and facilitation skills",
                    "Consider roles in project management or team coordination",
                    "Learn about agile methodologies and team dynamics",
                    "Practice conflict resolution and negotiation skills",
                ],
            ),
        ),
        (
            "analytical",
            RecommendationProfile::new(
                "Strategic Analyst",
                "You approach problems systematically and excel at logical reasoning.",
                [
                    "Develop data analysis and visualization skills",
                    "Consider roles in business analysis or consulting",
                    "Learn statistical analysis and research methods",
                    "Practice presenting complex information in simple ways",
                ],
            ),
        ),
        (
            "autonomous",
            RecommendationProfile::new(
                "Independent Worker",
                "You thrive when given autonomy and prefer self-directed work.",
                [
                    "Consider freelancing or consulting opportunities",
                    "Develop strong self-management and time management skills",
                    "Build a personal brand and professional network",
                    "Explore entrepreneurship and business development",
                ],
            ),
        ),
    ];

    let fallback = RecommendationProfile::new(
        "Versatile Professional",
        "You show balanced qualities across multiple areas and can adapt to various roles.",
        [
            "Explore different career paths to find your passion",
            "Develop a diverse skill set to increase your flexibility",
            "Consider roles that require adaptability and learning",
            "Network with professionals in various fields",
        ],
    );

    ProfileTable::new(profiles, fallback)
}
