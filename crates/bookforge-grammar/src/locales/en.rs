//! English tables (also the fallback locale).

use super::LocaleData;

pub(crate) const ENGLISH: LocaleData = LocaleData {
    title_patterns: &[
        "{adjective} {noun}",
        "The {noun} of {place}",
        "{name}'s {adjective} {noun}",
        "When {noun} {verb}",
        "{adjective} {noun}: A {noun} Story",
        "The {adjective} {noun} Chronicles",
        "{place}'s {adjective} Secret",
        "A {adjective} {noun}'s Journey",
        "The {noun} That {verb} the World",
        "{name} and the {adjective} {noun}",
    ],
    subtitle_patterns: &[
        "A Tale of {adjective} {noun}",
        "The {adjective} Chronicles",
        "Book {numeral} of the {adjective} {noun}",
        "The {adjective} {noun} Saga",
        "A {noun}'s Journey",
    ],
    taglines: &["A Story", "The Chronicles", "The True Account"],
    review_patterns: &[
        "This book made me {reaction}, especially because {sentence} The {aspect} was \
         {sentiment}, and {sentence}",
        "After reading {book_kind}, I must say: {opening} {sentence} What {reaction} me was \
         {aspect}. {sentence}",
        "{rating}: {opening} {sentence} The {aspect} was {sentiment}, but {sentence}",
        "As a {reader_kind}, I can say: {opening} {sentence} Particularly {aspect} made me \
         {reaction}. {sentence}",
        "Absolutely {sentiment}! {opening} {sentence} The {aspect} was {superlative}, which \
         {sentence}",
    ],
    imprint_pattern: "{surname} & {surname} Publishing",
    publisher_houses: &[
        "Golden Quill Press",
        "Midnight Ink",
        "Royal Pages Publishing",
        "Inkwell Classics",
    ],
    adjectives: &[
        "Lost",
        "Forgotten",
        "Golden",
        "Dark",
        "Mysterious",
        "Secret",
        "Ancient",
        "Hidden",
        "Crimson",
        "Silent",
        "Broken",
        "Eternal",
        "Whispering",
        "Cursed",
        "Sacred",
        "Vanishing",
        "Lonely",
        "Burning",
        "Frozen",
        "Shattered",
        "Last",
        "First",
        "Final",
        "Undying",
        "Unseen",
        "Spectral",
        "Emerald",
        "Ivory",
        "Obsidian",
    ],
    nouns: &[
        "Dragon",
        "Castle",
        "King",
        "Sword",
        "Journey",
        "Prophet",
        "Kingdom",
        "Throne",
        "Crown",
        "Legacy",
        "Shadow",
        "Phoenix",
        "Oracle",
        "Witch",
        "Chronicle",
        "Legend",
        "Empire",
        "Reckoning",
        "Sanctuary",
        "Oath",
        "Promise",
        "Codex",
        "Manuscript",
        "Tome",
        "Grimoire",
        "Relic",
        "Artifact",
        "Heirloom",
    ],
    places: &[
        "the Mountains",
        "the Forest",
        "the River",
        "the Castle",
        "Time",
        "the Stars",
        "the Ruins",
        "the Desert",
        "the Abyss",
        "the Cosmos",
        "the Void",
        "the Tides",
        "the Eclipse",
        "the Ashes",
        "the Storm",
        "the Horizon",
        "the Labyrinth",
        "the North",
        "the Sea",
        "the Underworld",
        "the Heavens",
        "the Mists",
    ],
    verbs: &[
        "Falls",
        "Rises",
        "Returns",
        "Whispers",
        "Burns",
        "Awakens",
        "Fades",
        "Shatters",
        "Ends",
        "Begins",
        "Crumbles",
        "Ascends",
        "Descends",
        "Vanishes",
        "Changes",
        "Remembers",
        "Forgets",
        "Destroys",
        "Creates",
        "Abandons",
    ],
    sentiments: &[
        "fantastic",
        "great",
        "terrible",
        "mediocre",
        "engaging",
        "boring",
        "impressive",
        "disappointing",
    ],
    reactions: &[
        "thrilled",
        "appalled",
        "surprised",
        "moved",
        "confused",
        "bored",
        "fascinated",
    ],
    ratings: &[
        "5/5 stars",
        "1/5 star",
        "Highly recommended",
        "Not recommended",
        "Masterpiece",
        "Disappointment of the year",
        "Best novel of the month",
    ],
    aspects: &[
        "plot",
        "character development",
        "writing style",
        "ending",
        "atmosphere",
        "dialogues",
        "story arc",
    ],
    openings: &[
        "This work deeply moved me.",
        "I was hooked from the first page.",
        "The story took an unexpected turn.",
    ],
    book_kinds: &["this novel", "this novella", "this story", "this thriller"],
    reader_kinds: &[
        "longtime reader",
        "literary critic",
        "book lover",
        "amateur writer",
    ],
    superlatives: &["outstanding", "disappointing", "surprising", "breathtaking"],
    given_names: &[
        "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "William",
        "Elizabeth", "David", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas",
        "Sarah", "Charles", "Karen",
    ],
    family_names: &[
        "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Wilson",
        "Anderson", "Taylor", "Moore", "Jackson", "Martin", "Lee", "Thompson", "White", "Harris",
        "Clark", "Lewis",
    ],
    family_name_first: false,
};
