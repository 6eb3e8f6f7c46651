//! Bundled site content
//!
//! Static wellness guides and hero tag-lines. Everything here is compiled in
//! and read-only at runtime.

use serde::Serialize;
use std::time::Duration;

/// Interval between hero tag-line rotations
pub const HERO_ROTATION: Duration = Duration::from_secs(4);

/// Simulated loading delay before a guide card opens
pub const CARD_REVEAL_DELAY: Duration = Duration::from_millis(600);

/// Number of guides shown before "show all" is toggled
pub const GALLERY_PREVIEW_COUNT: usize = 6;

/// Substitute image when a guide image fails to load
pub const IMAGE_FALLBACK_URL: &str =
    "https://images.unsplash.com/photo-1441986300917-64674bd600d8?auto=format&fit=crop&q=80&w=800";

/// Rotating hero tag-lines
pub const HERO_PHRASES: [&str; 3] = [
    "Healthier Living, Naturally",
    "Longevity Through Better Habits",
    "Wellness for a Longer, Better Life",
];

/// A long-form wellness guide shown in the gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WellnessCard {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub long_body: &'static str,
    pub image_url: &'static str,
    pub category: &'static str,
}

static WELLNESS_GUIDES: [WellnessCard; 12] = [
    WellnessCard {
        id: 1,
        title: "The Science of Sleep",
        description: "Discover how deep restorative sleep acts as the ultimate cognitive and biological reset.",
        long_body: "Deep sleep is not merely a period of inactivity. It is a highly active state where your brain flushes out toxins, consolidates memories, and repairs cellular damage. Optimizing your circadian rhythm through consistent sleep-wake cycles, reducing blue light exposure before bed, and maintaining a cool environment can dramatically improve your longevity and daily cognitive performance.",
        image_url: "https://images.unsplash.com/photo-1541480601022-2308c0f02487?auto=format&fit=crop&q=80&w=800",
        category: "Rest",
    },
    WellnessCard {
        id: 2,
        title: "Nutritional Density",
        description: "Moving beyond calories to understand the micronutrients that fuel your longevity.",
        long_body: "True health isn't just about counting calories; it's about the quality of those calories. Focusing on a diet rich in polyphenols, antioxidants, and omega-3 fatty acids helps combat chronic inflammation, the silent driver of aging. Incorporate a wide variety of colorful vegetables, fermented foods for gut health, and clean protein sources to provide your body with the building blocks it needs for repair.",
        image_url: "https://images.unsplash.com/photo-1490645935967-10de6ba17061?auto=format&fit=crop&q=80&w=800",
        category: "Nutrition",
    },
    WellnessCard {
        id: 3,
        title: "Mindful Movement",
        description: "Why functional strength and mobility are the true markers of a youthful body.",
        long_body: "Traditional exercise often focuses on aesthetics, but functional movement focuses on life. Maintaining muscle mass (sarcopenia prevention) and joint mobility are critical as we age. A combination of resistance training, flexibility work (like Yoga or Pilates), and steady-state zone 2 cardio creates a resilient cardiovascular system and a robust musculoskeletal frame.",
        image_url: "https://images.unsplash.com/photo-1518611012118-696072aa579a?auto=format&fit=crop&q=80&w=800",
        category: "Activity",
    },
    WellnessCard {
        id: 4,
        title: "Cognitive Resilience",
        description: "Strategies to keep your brain sharp and neuroplastic at any age.",
        long_body: "Neuroplasticity is the brain's ability to form new neural connections. Engaging in lifelong learning, meditation, and complex problem-solving helps maintain this plasticity. Reducing stress through mindfulness practices also protects the hippocampus from the damaging effects of chronic cortisol, preserving memory and executive function.",
        image_url: "https://images.unsplash.com/photo-1499209974431-9dac3adaf471?auto=format&fit=crop&q=80&w=800",
        category: "Mind",
    },
    WellnessCard {
        id: 5,
        title: "The Breathwork Path",
        description: "Harnessing the power of oxygen to regulate your nervous system.",
        long_body: "Most people are 'shallow breathers,' which keeps the body in a state of low-level stress. Techniques like box breathing, 4-7-8 breathing, or Tummo can shift the body from a sympathetic (fight-or-flight) to a parasympathetic (rest-and-digest) state in minutes. Master your breath to master your physiology.",
        image_url: "https://images.unsplash.com/photo-1506126613408-eca07ce68773?auto=format&fit=crop&q=80&w=800",
        category: "Biohacking",
    },
    WellnessCard {
        id: 6,
        title: "Hydration Logic",
        description: "It's not just about water; it's about cellular electrolyte balance.",
        long_body: "Proper hydration is essential for every enzymatic reaction in the body. However, drinking pure water can sometimes flush out essential minerals. Ensuring a proper balance of sodium, potassium, and magnesium allows for optimal electrical signaling in the brain and muscles. Drink filtered water and consider mineral supplementation based on your activity levels.",
        image_url: "https://images.unsplash.com/photo-1548839140-29a749e1cf4d?auto=format&fit=crop&q=80&w=800",
        category: "Essential",
    },
    WellnessCard {
        id: 7,
        title: "Gut-Brain Optimization",
        description: "Exploring the vast microbial universe within and its impact on mental clarity.",
        long_body: "The gut-brain axis is a bidirectional communication network between your enteric and central nervous systems. By cultivating a diverse microbiome through prebiotic fibers and fermented foods, you can influence neurotransmitter production, reduce systemic inflammation, and enhance mood stability and cognitive function.",
        image_url: "https://images.unsplash.com/photo-1616671285410-6a9787e91d8e?auto=format&fit=crop&q=80&w=800",
        category: "Nutrition",
    },
    WellnessCard {
        id: 8,
        title: "Heat Shock Response",
        description: "How regular sauna use activates protective proteins to slow down aging.",
        long_body: "Exposure to high temperatures triggers the expression of Heat Shock Proteins (HSPs). These proteins act as 'molecular chaperones,' ensuring that other cellular proteins are folded correctly and repairing those that are damaged. Regular sauna use has been linked to improved cardiovascular health and a significantly lower risk of neurodegenerative diseases.",
        image_url: "https://images.unsplash.com/photo-1519791883288-dc8bd696e667?auto=format&fit=crop&q=80&w=800",
        category: "Biohacking",
    },
    WellnessCard {
        id: 9,
        title: "The Cold Exposure Ritual",
        description: "Strengthening the nervous system and boosting dopamine through the cold.",
        long_body: "Deliberate Cold Exposure (DCE), such as cold plunges or showers, triggers a robust release of norepinephrine and dopamine, lasting for hours. This controlled stressor strengthens the autonomic nervous system, improves metabolic rate by activating brown adipose tissue, and enhances mental resilience against everyday stressors.",
        image_url: "https://images.unsplash.com/photo-1476514525535-07fb3b4ae5f1?auto=format&fit=crop&q=80&w=800",
        category: "Biohacking",
    },
    WellnessCard {
        id: 10,
        title: "Nature Recalibration",
        description: "Why Nature Immersion is a physiological necessity in our digital age.",
        long_body: "Spending time in natural environments, often called 'Forest Bathing,' significantly lowers cortisol levels and blood pressure. The exposure to phytoncides, organic compounds released by trees, boosts the activity of natural killer (NK) cells, strengthening your immune system's ability to combat infections and tumors.",
        image_url: "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?auto=format&fit=crop&q=80&w=800",
        category: "Mind",
    },
    WellnessCard {
        id: 11,
        title: "Metabolic Flexibility",
        description: "Mastering the switch between burning glucose and fats for sustained energy.",
        long_body: "Metabolic flexibility is the body's ability to efficiently alternate between fuel sources. Through strategic intermittent fasting and low-glycemic eating, you can train your mitochondria to burn fat more effectively. This reduces insulin resistance, stabilizes energy levels throughout the day, and supports long-term cellular health.",
        image_url: "https://images.unsplash.com/photo-1466632347070-9645430277bc?auto=format&fit=crop&q=80&w=800",
        category: "Essential",
    },
    WellnessCard {
        id: 12,
        title: "Autophagy and Renewal",
        description: "Understanding your body's natural cellular recycling and repair system.",
        long_body: "Autophagy is the 'self-eating' process where cells recycle damaged components. Triggered primarily by nutrient deprivation (fasting) or high-intensity exercise, autophagy clears out cellular junk that contributes to aging and disease. Optimizing these cycles ensures that your cellular machinery remains lean, clean, and efficient.",
        image_url: "https://images.unsplash.com/photo-1576086213369-97a306d36557?auto=format&fit=crop&q=80&w=800",
        category: "Biohacking",
    },
];

/// All bundled guides in display order
pub fn guides() -> &'static [WellnessCard] {
    &WELLNESS_GUIDES
}

/// Look up a guide by id
pub fn guide(id: u32) -> Option<&'static WellnessCard> {
    WELLNESS_GUIDES.iter().find(|card| card.id == id)
}

/// Guides rendered by the gallery, either the preview slice or everything
pub fn visible_guides(show_all: bool) -> &'static [WellnessCard] {
    if show_all {
        &WELLNESS_GUIDES
    } else {
        &WELLNESS_GUIDES[..GALLERY_PREVIEW_COUNT.min(WELLNESS_GUIDES.len())]
    }
}

/// Index of the tag-line that follows `index`
pub fn next_phrase(index: usize) -> usize {
    (index + 1) % HERO_PHRASES.len()
}
