//! Static per-city tables and the generic fallbacks used for unknown cities.

use super::classify::Category;

/// Everything known about one city. Missing entries fall back to the generic tables.
#[derive(Debug)]
pub struct CityProfile {
    pub key: &'static str,
    pub recommendations: &'static [(Category, &'static str)],
    pub facts: CityFacts,
    pub tips: Option<[&'static str; 2]>,
    /// Sights suggested alongside the weather-driven activities.
    pub highlights: Option<[&'static str; 2]>,
}

#[derive(Debug)]
pub struct CityFacts {
    pub rainy: Option<&'static str>,
    pub sunny: Option<&'static str>,
    pub cloudy: Option<&'static str>,
    pub default: Option<&'static str>,
}

pub fn lookup(table: &[(Category, &'static str)], category: Category) -> Option<&'static str> {
    table
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, text)| *text)
}

/// Case-insensitive exact match on the city name.
pub fn city(name: &str) -> Option<&'static CityProfile> {
    let key = name.trim().to_lowercase();
    CITIES.iter().find(|c| c.key == key)
}

/// City-agnostic recommendation for each category.
pub fn default_recommendation(category: Category) -> &'static str {
    match category {
        Category::Hot => "🏛️ Visit a local museum to cool off",
        Category::Warm => "🌳 Enjoy a local park or garden",
        Category::Cool => "🏛️ Explore local attractions",
        Category::Cold => "☕ Warm up in a cozy café",
        Category::Rainy => "🏛️ Visit indoor attractions",
        Category::Sunny => "🌳 Enjoy outdoor activities",
    }
}

pub const RAINY_FACT: &str = "Rainy days are perfect for indoor activities and cozy cafes! ☔";
pub const SUNNY_FACT: &str = "Perfect weather for outdoor activities and sightseeing! ☀️";
pub const CLOUDY_FACT: &str =
    "Cloudy weather is great for photography and exploring indoor attractions! ☁️";
pub const HOT_FACT: &str =
    "Hot weather! Perfect time for ice cream and finding air-conditioned spots! 🍦";
pub const COLD_FACT: &str = "Cold weather! Great time for hot drinks and cozy indoor activities! ☕";
pub const UNIVERSAL_FACT: &str = "Every city has its unique charm and hidden gems to discover! ✨";

const NO_FACTS: CityFacts = CityFacts {
    rainy: None,
    sunny: None,
    cloudy: None,
    default: None,
};

static CITIES: &[CityProfile] = &[
    CityProfile {
        key: "tokyo",
        recommendations: &[
            (Category::Hot, "🏯 Visit the air-conditioned Tokyo National Museum"),
            (Category::Warm, "🌸 Stroll through Shinjuku Gyoen National Garden"),
            (Category::Cool, "🗼 Climb Tokyo Tower for city views"),
            (Category::Cold, "♨️ Relax in a traditional onsen (hot spring)"),
            (Category::Rainy, "🏛️ Explore the Imperial Palace East Gardens"),
            (Category::Sunny, "🎌 Walk the historic Meiji Shrine"),
        ],
        facts: CityFacts {
            rainy: Some("Perfect weather for visiting the beautiful cherry blossoms in Ueno Park! 🌸"),
            sunny: Some("Perfect weather for visiting Tokyo Tower or taking a stroll in Yoyogi Park! 🗼"),
            cloudy: None,
            default: Some("Did you know Tokyo has the world's busiest pedestrian crossing at Shibuya? 🚶‍♂️"),
        },
        tips: Some([
            "🚇 **Local Tip:** Use the efficient subway system to get around",
            "🍜 **Food Tip:** Try local ramen shops for authentic cuisine",
        ]),
        highlights: Some([
            "🗼 Visit Tokyo Tower for amazing city views",
            "🌸 Check out local parks and gardens",
        ]),
    },
    CityProfile {
        key: "london",
        recommendations: &[
            (Category::Hot, "🏛️ Cool off at the British Museum"),
            (Category::Warm, "🌳 Enjoy Hyde Park and Kensington Gardens"),
            (Category::Cool, "🎭 Visit the West End theatres"),
            (Category::Cold, "☕ Warm up in a traditional English pub"),
            (Category::Rainy, "🏛️ Explore the Natural History Museum"),
            (Category::Sunny, "🌉 Walk across Tower Bridge"),
        ],
        facts: CityFacts {
            rainy: Some("Classic London weather! Great time to visit the British Museum or enjoy a cozy pub. ☔"),
            sunny: Some("Sunny London! Great time to visit Hyde Park or take a Thames River cruise! ☀️"),
            cloudy: Some("Classic London weather! Great for visiting museums or enjoying afternoon tea! ☁️"),
            default: Some("London has over 170 museums, many of them free to visit! 🏛️"),
        },
        tips: Some([
            "🚇 **Local Tip:** Get an Oyster card for public transport",
            "☕ **Food Tip:** Experience traditional afternoon tea",
        ]),
        highlights: Some([
            "🏛️ Explore the British Museum",
            "☕ Enjoy traditional afternoon tea",
        ]),
    },
    CityProfile {
        key: "new york",
        recommendations: &[
            (Category::Hot, "🏛️ Visit the air-conditioned Metropolitan Museum"),
            (Category::Warm, "🌳 Stroll through Central Park"),
            (Category::Cool, "🗽 Take the ferry to Statue of Liberty"),
            (Category::Cold, "☕ Warm up in a cozy Brooklyn café"),
            (Category::Rainy, "🎭 Catch a Broadway show"),
            (Category::Sunny, "🌆 Walk the High Line elevated park"),
        ],
        facts: CityFacts {
            rainy: None,
            sunny: Some("Perfect weather for walking across the Brooklyn Bridge or visiting Central Park! 🌉"),
            cloudy: None,
            default: Some("New York City has over 8 million people and 800 languages spoken! 🌆"),
        },
        tips: Some([
            "🚇 **Local Tip:** Use the subway - it's the fastest way around",
            "🍕 **Food Tip:** Try authentic New York pizza",
        ]),
        highlights: Some([
            "🌉 Walk across the Brooklyn Bridge",
            "🏙️ Visit Central Park for nature",
        ]),
    },
    CityProfile {
        key: "paris",
        recommendations: &[
            (Category::Hot, "🏛️ Cool off at the Louvre Museum"),
            (Category::Warm, "🌸 Stroll through Luxembourg Gardens"),
            (Category::Cool, "🗼 Visit the Eiffel Tower"),
            (Category::Cold, "☕ Warm up in a charming café"),
            (Category::Rainy, "🏛️ Explore the Musée d'Orsay"),
            (Category::Sunny, "🌉 Walk along the Seine River"),
        ],
        facts: CityFacts {
            rainy: Some("Rainy days in Paris are perfect for exploring the Louvre or enjoying café culture! ☕"),
            sunny: Some("Beautiful weather for climbing the Eiffel Tower or strolling along the Seine! 🗼"),
            cloudy: None,
            default: Some("Paris is known as the 'City of Light' and has over 300 illuminated monuments! 💡"),
        },
        tips: Some([
            "🚇 **Local Tip:** Use the Metro for easy navigation",
            "🥐 **Food Tip:** Visit local bakeries for fresh pastries",
        ]),
        highlights: Some([
            "🗼 Climb the Eiffel Tower",
            "☕ Experience café culture",
        ]),
    },
    CityProfile {
        key: "sydney",
        recommendations: &[
            (Category::Hot, "🏛️ Visit the air-conditioned Art Gallery of NSW"),
            (Category::Warm, "🏖️ Relax at Bondi Beach"),
            (Category::Cool, "🎭 Visit the Sydney Opera House"),
            (Category::Cold, "☕ Warm up in a harbor-side café"),
            (Category::Rainy, "🏛️ Explore the Australian Museum"),
            (Category::Sunny, "🌉 Walk across Sydney Harbour Bridge"),
        ],
        facts: CityFacts {
            rainy: Some("Rain in Sydney means the Opera House looks even more dramatic! 🎭"),
            sunny: Some("Great weather for visiting Bondi Beach or climbing the Sydney Harbour Bridge! 🏖️"),
            cloudy: Some("Cloudy weather is perfect for visiting the Royal Botanic Garden! 🌿"),
            default: Some("Sydney Harbour is home to over 600 species of fish! 🐟"),
        },
        tips: Some([
            "🚇 **Local Tip:** Use Opal card for public transport",
            "🦘 **Local Tip:** Visit wildlife parks to see native animals",
        ]),
        highlights: Some([
            "🏖️ Visit Bondi Beach",
            "🎭 Explore the Opera House",
        ]),
    },
    CityProfile {
        key: "duluth",
        recommendations: &[
            (Category::Hot, "🏛️ Visit the Great Lakes Aquarium"),
            (Category::Warm, "🌊 Walk along Lake Superior"),
            (Category::Cool, "🌉 Visit the Aerial Lift Bridge"),
            (Category::Cold, "☕ Warm up in a cozy café"),
            (Category::Rainy, "🏛️ Explore the Duluth Art Institute"),
            (Category::Sunny, "🌳 Hike in Enger Park"),
        ],
        facts: CityFacts {
            rainy: None,
            sunny: None,
            cloudy: Some("Cloudy weather is perfect for exploring the beautiful Lake Superior shoreline! 🏞️"),
            default: Some("Duluth is home to the world's largest freshwater lake, Lake Superior! 🏞️"),
        },
        tips: Some([
            "🚗 **Local Tip:** Rent a car to explore the scenic shoreline",
            "🏞️ **Local Tip:** Visit state parks for hiking and nature",
        ]),
        highlights: Some([
            "🏞️ Explore Lake Superior shoreline",
            "🚢 Visit the maritime museum",
        ]),
    },
    CityProfile {
        key: "mumbai",
        recommendations: &[
            (Category::Hot, "🏛️ Visit the air-conditioned National Museum"),
            (Category::Warm, "🌊 Walk along Marine Drive"),
            (Category::Cool, "🏛️ Visit the Gateway of India"),
            (Category::Cold, "☕ Warm up in a local café"),
            (Category::Rainy, "🏛️ Explore the Chhatrapati Shivaji Museum"),
            (Category::Sunny, "🌳 Visit the Sanjay Gandhi National Park"),
        ],
        facts: NO_FACTS,
        tips: None,
        highlights: None,
    },
    CityProfile {
        key: "beijing",
        recommendations: &[
            (Category::Hot, "🏛️ Visit the air-conditioned National Museum"),
            (Category::Warm, "🏯 Walk through the Forbidden City"),
            (Category::Cool, "🐉 Visit the Temple of Heaven"),
            (Category::Cold, "☕ Warm up in a traditional tea house"),
            (Category::Rainy, "🏛️ Explore the Capital Museum"),
            (Category::Sunny, "🌉 Walk along the Great Wall"),
        ],
        facts: NO_FACTS,
        tips: None,
        highlights: None,
    },
    CityProfile {
        key: "moscow",
        recommendations: &[
            (Category::Hot, "🏛️ Visit the air-conditioned Tretyakov Gallery"),
            (Category::Warm, "🌳 Stroll through Gorky Park"),
            (Category::Cool, "⛪ Visit Saint Basil's Cathedral"),
            (Category::Cold, "☕ Warm up in a cozy café"),
            (Category::Rainy, "🏛️ Explore the Pushkin Museum"),
            (Category::Sunny, "🏰 Walk through Red Square"),
        ],
        facts: NO_FACTS,
        tips: None,
        highlights: None,
    },
    CityProfile {
        key: "cairo",
        recommendations: &[
            (Category::Hot, "🏛️ Visit the air-conditioned Egyptian Museum"),
            (Category::Warm, "🐪 Take a camel ride near the pyramids"),
            (Category::Cool, "🏺 Visit the Great Pyramid of Giza"),
            (Category::Cold, "☕ Warm up in a traditional café"),
            (Category::Rainy, "🏛️ Explore the Coptic Museum"),
            (Category::Sunny, "🌊 Take a Nile River cruise"),
        ],
        facts: NO_FACTS,
        tips: None,
        highlights: None,
    },
];
