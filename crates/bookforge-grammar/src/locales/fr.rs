//! French tables.

use super::LocaleData;

pub(crate) const FRENCH: LocaleData = LocaleData {
    title_patterns: &[
        "{adjective} {noun}",
        "Le {noun} de {place}",
        "{noun} {adjective} de {noun}",
        "Quand {noun} {verb}",
        "{adjective} {noun}: Une histoire de {noun}",
        "Les Chroniques {adjective} {noun}",
        "Le {adjective} Secret de {place}",
        "Le {noun} qui {verb} le monde",
        "{noun} et le {adjective} {noun}",
    ],
    subtitle_patterns: &[
        "Un conte de {adjective} {noun}",
        "Les Chroniques {adjective}",
        "Livre {numeral} des {adjective} {noun}",
        "La Saga {adjective} {noun}",
        "Un voyage de {noun}",
    ],
    taglines: &["Une histoire", "Les chroniques", "La véritable histoire"],
    review_patterns: &[
        "Ce livre m'a {reaction}, surtout parce que {sentence} Le {aspect} était {sentiment}, \
         et {sentence}",
        "Après avoir lu {book_kind}, je dois dire: {opening} {sentence} Ce qui m'a {reaction}, \
         c'est {aspect}. {sentence}",
        "{rating}: {opening} {sentence} Le {aspect} était {sentiment}, mais {sentence}",
        "En tant que {reader_kind}, je peux dire: {opening} {sentence} Particulièrement {aspect} \
         m'a {reaction}. {sentence}",
        "Absolument {sentiment}! {opening} {sentence} Le {aspect} était {superlative}, ce qui \
         {sentence}",
    ],
    imprint_pattern: "Éditions {surname} & {surname}",
    publisher_houses: &[
        "Plume d'Or",
        "Livre de Poche",
        "Éditions du Soleil",
        "Presse Littéraire",
    ],
    adjectives: &[
        "Perdu",
        "Oublié",
        "Doré",
        "Sombre",
        "Mystérieux",
        "Secret",
        "Ancien",
        "Caché",
        "Pourpre",
        "Silencieux",
        "Brisé",
        "Éternel",
        "Maudit",
        "Sacré",
        "Brûlant",
        "Gelé",
        "Solitaire",
        "Dernier",
        "Premier",
        "Immortel",
        "Invisible",
        "Émeraude",
        "Ivoire",
    ],
    nouns: &[
        "Dragon",
        "Château",
        "Roi",
        "Épée",
        "Voyage",
        "Prophète",
        "Royaume",
        "Trône",
        "Couronne",
        "Héritage",
        "Ombre",
        "Phénix",
        "Oracle",
        "Sorcière",
        "Légende",
        "Empire",
        "Abîme",
        "Promesse",
        "Codex",
        "Manuscrit",
        "Tome",
        "Relique",
        "Artéfact",
    ],
    places: &[
        "les Montagnes",
        "la Forêt",
        "la Rivière",
        "le Château",
        "le Temps",
        "les Étoiles",
        "les Ruines",
        "le Désert",
        "l'Abîme",
        "le Cosmos",
        "le Vide",
        "les Marées",
        "l'Éclipse",
        "les Cendres",
        "la Tempête",
        "l'Horizon",
        "le Labyrinthe",
        "le Nord",
        "la Mer",
        "les Enfers",
        "les Cieux",
        "les Brumes",
    ],
    verbs: &[
        "Tombe",
        "Monte",
        "Revient",
        "Murmure",
        "Brûle",
        "S'éveille",
        "S'efface",
        "Se brise",
        "Finit",
        "Commence",
        "S'effondre",
        "Descend",
        "Disparaît",
        "Change",
        "Se souvient",
        "Oublie",
        "Détruit",
        "Crée",
        "Abandonne",
    ],
    sentiments: &[
        "fantastique",
        "génial",
        "terrible",
        "moyen",
        "captivant",
        "ennuyeux",
        "impressionnant",
        "décevant",
    ],
    reactions: &[
        "enthousiasmé",
        "consterné",
        "surpris",
        "ému",
        "confus",
        "ennuyé",
        "fasciné",
    ],
    ratings: &[
        "5/5 étoiles",
        "1/5 étoile",
        "Recommandé",
        "Déconseillé",
        "Chef-d'œuvre",
        "Déception de l'année",
        "Meilleur roman du mois",
    ],
    aspects: &[
        "intrigue",
        "développement des personnages",
        "style d'écriture",
        "fin",
        "ambiance",
        "dialogues",
        "arc dramatique",
    ],
    openings: &[
        "Cette œuvre m'a profondément touché.",
        "J'ai été captivé dès la première page.",
        "L'histoire a pris un tour inattendu.",
    ],
    book_kinds: &["ce roman", "cette nouvelle", "ce récit", "ce thriller"],
    reader_kinds: &[
        "lecteur assidu",
        "critique littéraire",
        "amateur de livres",
        "écrivain amateur",
    ],
    superlatives: &[
        "exceptionnel",
        "décevant",
        "surprenant",
        "à couper le souffle",
    ],
    given_names: &[
        "Jean", "Marie", "Pierre", "Camille", "Louis", "Chloé", "Hugo", "Manon", "Lucas", "Emma",
        "Nathan", "Léa", "Gabriel", "Inès", "Arthur", "Jade", "Jules", "Louise", "Raphaël",
        "Alice",
    ],
    family_names: &[
        "Martin", "Bernard", "Dubois", "Thomas", "Robert", "Richard", "Petit", "Durand", "Leroy",
        "Moreau", "Simon", "Laurent", "Lefebvre", "Michel", "Garcia", "David", "Bertrand", "Roux",
        "Vincent", "Fournier",
    ],
    family_name_first: false,
};
