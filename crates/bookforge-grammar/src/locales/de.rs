//! German tables.

use super::LocaleData;

pub(crate) const GERMAN: LocaleData = LocaleData {
    title_patterns: &[
        "{adjective} {noun}",
        "Das {noun} von {place}",
        "{name}s {adjective} {noun}",
        "Als {noun} {verb}",
        "{adjective} {noun}: Eine {noun} Geschichte",
        "Die {adjective} {noun} Chroniken",
        "{place}s {adjective} Geheimnis",
        "Die {noun} die die Welt {verb}",
        "{name} und das {adjective} {noun}",
    ],
    subtitle_patterns: &[
        "Eine Geschichte von {adjective} {noun}",
        "Die {adjective} Chroniken",
        "Buch {numeral} der {adjective} {noun}",
        "Die {adjective} {noun} Saga",
        "Eine {noun} Reise",
    ],
    taglines: &["Eine Geschichte", "Die Chroniken", "Die wahre Geschichte"],
    review_patterns: &[
        "Das Buch hat mich {reaction}, besonders weil {sentence} Die {aspect} war {sentiment}, \
         und {sentence}",
        "Nachdem ich {book_kind} gelesen habe, muss ich sagen: {opening} {sentence} Was mich \
         {reaction} hat, war {aspect}. {sentence}",
        "{rating}: {opening} {sentence} Die {aspect} war {sentiment}, aber {sentence}",
        "Als {reader_kind} kann ich sagen: {opening} {sentence} Besonders {aspect} hat mich \
         {reaction}. {sentence}",
        "Absolut {sentiment}! {opening} {sentence} Die {aspect} war {superlative}, was {sentence}",
    ],
    imprint_pattern: "{surname} & {surname} Verlag",
    publisher_houses: &[
        "Goldblatt Bücher",
        "Nordlicht Verlag",
        "Tintenherz Press",
        "Silberfeder Medien",
    ],
    adjectives: &[
        "Verloren",
        "Vergessen",
        "Goldene",
        "Dunkle",
        "Geheimnisvolle",
        "Alte",
        "Versteckte",
        "Blutrote",
        "Stille",
        "Gebrochene",
        "Ewige",
        "Flüsternde",
        "Verfluchte",
        "Heilige",
        "Verschwindende",
        "Einsame",
        "Brennende",
        "Letzte",
        "Erste",
        "Unsterbliche",
        "Unsichtbare",
        "Smaragdene",
        "Elfenbeinerne",
    ],
    nouns: &[
        "Drache",
        "Schloss",
        "König",
        "Schwert",
        "Reise",
        "Prophet",
        "Königreich",
        "Thron",
        "Krone",
        "Vermächtnis",
        "Schatten",
        "Phönix",
        "Orakel",
        "Hexe",
        "Chronik",
        "Legende",
        "Imperium",
        "Abgrund",
        "Versprechen",
        "Kodex",
        "Manuskript",
        "Foliant",
        "Relikt",
        "Artefakt",
        "Erbstück",
    ],
    places: &[
        "den Bergen",
        "dem Wald",
        "dem Fluss",
        "der Burg",
        "der Zeit",
        "den Sternen",
        "den Ruinen",
        "der Wüste",
        "dem Abgrund",
        "dem Kosmos",
        "der Leere",
        "den Gezeiten",
        "der Finsternis",
        "der Asche",
        "dem Sturm",
        "dem Horizont",
        "dem Labyrinth",
        "dem Norden",
        "der See",
        "der Unterwelt",
        "den Himmeln",
        "den Nebeln",
    ],
    verbs: &[
        "Fällt",
        "Steigt",
        "Kehrt zurück",
        "Flüstert",
        "Brennt",
        "Erwacht",
        "Verblasst",
        "Zerbricht",
        "Endet",
        "Beginnt",
        "Zerfällt",
        "Steigt auf",
        "Steigt ab",
        "Verschwindet",
        "Verändert",
        "Erinnert",
        "Vergisst",
        "Zerstört",
        "Erschafft",
        "Verlässt",
    ],
    sentiments: &[
        "fantastisch",
        "toll",
        "schrecklich",
        "mittelmäßig",
        "fesselnd",
        "langweilig",
        "beeindruckend",
        "enttäuschend",
    ],
    reactions: &[
        "begeistert",
        "entsetzt",
        "überrascht",
        "gerührt",
        "verwirrt",
        "gelangweilt",
        "fasziniert",
    ],
    ratings: &[
        "5/5 Sterne",
        "1/5 Stern",
        "Empfehlenswert",
        "Nicht empfehlenswert",
        "Meisterwerk",
        "Enttäuschung des Jahres",
        "Bester Roman des Monats",
    ],
    aspects: &[
        "Handlung",
        "Charakterentwicklung",
        "Schreibstil",
        "Ende",
        "Atmosphäre",
        "Dialoge",
        "Spannungsbogen",
    ],
    openings: &[
        "Dieses Werk hat mich tief bewegt.",
        "Ich war von der ersten Seite an gefesselt.",
        "Die Geschichte entwickelte sich unerwartet.",
    ],
    book_kinds: &[
        "diesen Roman",
        "diese Novelle",
        "diese Erzählung",
        "diesen Thriller",
    ],
    reader_kinds: &[
        "langjähriger Leser",
        "Literaturkritiker",
        "Buchliebhaber",
        "Hobbyautor",
    ],
    superlatives: &[
        "herausragend",
        "enttäuschend",
        "überraschend",
        "atemberaubend",
    ],
    given_names: &[
        "Lukas", "Anna", "Leon", "Lena", "Finn", "Marie", "Jonas", "Sophie", "Paul", "Emilia",
        "Felix", "Hannah", "Maximilian", "Mia", "Elias", "Clara", "Noah", "Greta", "Moritz",
        "Johanna",
    ],
    family_names: &[
        "Müller",
        "Schmidt",
        "Schneider",
        "Fischer",
        "Weber",
        "Meyer",
        "Wagner",
        "Becker",
        "Schulz",
        "Hoffmann",
        "Koch",
        "Bauer",
        "Richter",
        "Klein",
        "Wolf",
        "Schröder",
        "Neumann",
        "Braun",
        "Zimmermann",
        "Krüger",
    ],
    family_name_first: true,
};
