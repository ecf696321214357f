use crate::{
    constants::{CARD_GAP, CARD_WIDTH},
    error::RegistryError,
};
use ratatui::style::Color;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_color(self) -> Color {
        Color::Rgb(self.0, self.1, self.2)
    }

    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

/// Gradient stops for a chapter panel and its tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub gradient: [Rgb; 3],
    pub tab: [Rgb; 2],
}

impl Theme {
    /// Samples the three-stop panel gradient at `t` in [0, 1].
    pub fn sample(&self, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        if t <= 0.5 {
            self.gradient[0].lerp(self.gradient[1], t * 2.0)
        } else {
            self.gradient[1].lerp(self.gradient[2], (t - 0.5) * 2.0)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub badge: &'static str,
    pub lines: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub id: usize,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub label: &'static str,
    pub heading: &'static str,
    pub description: &'static [&'static str],
    pub cards: &'static [Card],
    pub theme: Theme,
}

impl Chapter {
    pub fn numeral(&self) -> &'static str {
        match self.id {
            1 => "I",
            2 => "II",
            3 => "III",
            4 => "IV",
            5 => "V",
            6 => "VI",
            7 => "VII",
            8 => "VIII",
            9 => "IX",
            10 => "X",
            _ => "#",
        }
    }

    /// Width in cells of the horizontally scrollable card row.
    pub fn content_width(&self) -> u16 {
        let count = self.cards.len() as u16;
        if count == 0 {
            return 0;
        }
        count
            .saturating_mul(CARD_WIDTH)
            .saturating_add((count - 1).saturating_mul(CARD_GAP))
    }
}

/// Ordered, immutable list of chapters. Ids run 1..=N.
#[derive(Debug, Clone)]
pub struct ChapterRegistry {
    chapters: Vec<Chapter>,
}

impl ChapterRegistry {
    pub fn new(chapters: Vec<Chapter>) -> Result<Self, RegistryError> {
        if chapters.is_empty() {
            return Err(RegistryError::Empty);
        }

        for (position, chapter) in chapters.iter().enumerate() {
            if chapter.id != position + 1 {
                return Err(RegistryError::NonContiguousId {
                    position,
                    found: chapter.id,
                });
            }
        }

        debug!("Chapter registry loaded with {} chapters", chapters.len());
        Ok(Self { chapters })
    }

    /// The four chapters of the story, validated like any other registry.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::new(builtin_chapters())
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Looks up a chapter by its 1-based id.
    pub fn get(&self, id: usize) -> Option<&Chapter> {
        id.checked_sub(1).and_then(|index| self.chapters.get(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Chapter> {
        self.chapters.iter()
    }
}

pub const HERO_TITLE: [&str; 2] = ["Donor", "Gardening"];
pub const HERO_SUBTITLE: &str = "From Donation to Relationship";
pub const HERO_DESCRIPTION: &[&str] = &[
    "Most nonprofits spend significant time and resources finding new donors.",
    "Yet research shows that acquiring a new donor costs twelve times more",
    "than continuing a relationship with someone who already believes in your work.",
];
pub const HERO_CALLOUT: &[&str] = &[
    "CULTIVATION IN ACTION",
    "Experience how everyday giving can evolve from a single transaction",
    "into a lasting donor relationship.",
    "Follow Nidhi's journey across four chapters.",
];
pub const HERO_PROMPT: &str = "Scroll or select a chapter to begin";

pub const FOOTER_LINES: &[&str] = &[
    "GIVING TOGETHER FOUNDATION",
    "An independent, India-led nonprofit committed to building the",
    "infrastructure for everyday generosity.",
    "Based in India, working nationwide",
    "partnerships@givingtogetherfoundation.org",
];

const TILLING_CARDS: &[Card] = &[
    Card {
        badge: "THE OLD WAY",
        lines: &[
            "You may reach many people,",
            "but responses are scattered.",
            "Most donations are small,",
            "one-time, and disconnected.",
        ],
    },
    Card {
        badge: "DID YOU KNOW?",
        lines: &[
            "It costs 10x more",
            "to acquire a new donor than",
            "continuing a relationship with",
            "someone who already believes",
            "in your work.",
        ],
    },
    Card {
        badge: "💡 INSTEAD",
        lines: &[
            "Tap into your existing network",
            "and you reach the people who",
            "care about the cause. The appeal",
            "feels more personal, more trusted.",
        ],
    },
    Card {
        badge: "UGARTA EG STUDY SHOWS",
        lines: &[
            "60% of nonprofits",
            "find outreach through existing",
            "networks to be their most",
            "effective way of reaching new",
            "supporters.",
        ],
    },
];

const PLANTING_CARDS: &[Card] = &[
    Card {
        badge: "OPTION A",
        lines: &[
            "Record her details in your",
            "database and acknowledge",
            "her support.",
        ],
    },
    Card {
        badge: "SCENARIO 2",
        lines: &[
            "You reach out to Nidhi, someone",
            "from your existing network. She",
            "becomes a first-time donor with",
            "₹2,500 via your crowdfunding",
            "campaign. What do you do next?",
        ],
    },
    Card {
        badge: "OPTION B",
        lines: &[
            "No thank you or follow-ups.",
            "Accept the donation and",
            "move on.",
        ],
    },
];

const NURTURING_CARDS: &[Card] = &[
    Card {
        badge: "OPTION A",
        lines: &["Reach out only when you", "need funds again."],
    },
    Card {
        badge: "SCENARIO 3",
        lines: &[
            "Nidhi has already donated once.",
            "Two months have passed.",
            "What do you do next?",
        ],
    },
    Card {
        badge: "OPTION B",
        lines: &[
            "Share impact and invite her to",
            "engage: updates, events,",
            "conversations, without asking",
            "for money.",
        ],
    },
];

const GROWTH_CARDS: &[Card] = &[
    Card {
        badge: "OPTION A",
        lines: &[
            "Treat Nidhi like any other",
            "donor and send a standard",
            "appeal.",
        ],
    },
    Card {
        badge: "SCENARIO 4",
        lines: &[
            "A year has passed. Nidhi has",
            "stayed engaged and informed.",
            "Your annual crowdfunding",
            "campaign is live. What do you do?",
        ],
    },
    Card {
        badge: "OPTION B",
        lines: &[
            "Invite her to give again, and",
            "share the cause with her",
            "network.",
        ],
    },
];

const NETWORK_DESCRIPTION: &[&str] = &[
    "Before you ask for support, it helps to understand who is already around you.",
    "This chapter focuses on mapping your existing network so your fundraising",
    "begins with relationships, not cold outreach.",
];

fn builtin_chapters() -> Vec<Chapter> {
    vec![
        Chapter {
            id: 1,
            title: "I. Tilling the Soil",
            subtitle: "Network Expansion",
            label: "CHAPTER I: TILLING THE SOIL",
            heading: "Network Expansion",
            description: NETWORK_DESCRIPTION,
            cards: TILLING_CARDS,
            theme: Theme {
                gradient: [Rgb(0x1e, 0xb5, 0x9a), Rgb(0x6f, 0xdc, 0x8c), Rgb(0xa8, 0xe5, 0x83)],
                tab: [Rgb(0x1e, 0xb5, 0x9a), Rgb(0x16, 0xa0, 0x85)],
            },
        },
        Chapter {
            id: 2,
            title: "II. The Planting",
            subtitle: "Building Connections",
            label: "CHAPTER II: THE PLANTING",
            heading: "First Donation",
            description: &[
                "A first gift is the start of a relationship, not the end of a campaign.",
                "What you do in the days after it arrives decides whether it repeats.",
            ],
            cards: PLANTING_CARDS,
            theme: Theme {
                gradient: [Rgb(0x4d, 0xd4, 0xd4), Rgb(0x5d, 0xe8, 0xd5), Rgb(0x3a, 0xba, 0xba)],
                tab: [Rgb(0x4d, 0xd4, 0xd4), Rgb(0x3a, 0xba, 0xba)],
            },
        },
        Chapter {
            id: 3,
            title: "III. The Nurturing",
            subtitle: "Stewarding Donors",
            label: "CHAPTER III: THE NURTURING",
            heading: "Stewarding Donors",
            description: &[
                "Between asks, donors decide whether they belong.",
                "Stewardship keeps them close to the work their money made possible.",
            ],
            cards: NURTURING_CARDS,
            theme: Theme {
                gradient: [Rgb(0x4d, 0xd4, 0xd4), Rgb(0xb8, 0xe9, 0x86), Rgb(0xf4, 0xd0, 0x3f)],
                tab: [Rgb(0x4d, 0xd4, 0xd4), Rgb(0x3a, 0xba, 0xba)],
            },
        },
        Chapter {
            id: 4,
            title: "IV. Growth",
            subtitle: "Donors to Champions",
            label: "CHAPTER IV: GROWTH",
            heading: "Donors to Champions",
            description: &[
                "Engaged donors give again, and bring others with them.",
                "Growth is the network you tilled at the start, now working for the cause.",
            ],
            cards: GROWTH_CARDS,
            theme: Theme {
                gradient: [Rgb(0x89, 0xb8, 0x30), Rgb(0xc8, 0xd9, 0x45), Rgb(0xe8, 0xeb, 0x5a)],
                tab: [Rgb(0x89, 0xb8, 0x30), Rgb(0x6a, 0x90, 0x20)],
            },
        },
    ]
}
