//! The character cast — hardcoded card data and model placements.
//!
//! Six characters from *Le Petit Prince*, cycled by moon clicks. Text
//! is shown verbatim by the frontend; placements position each GLB in
//! the scene.

use glam::Vec3;

/// One character card: display text plus model placement.
#[derive(Debug, Clone, Copy)]
pub struct CharacterEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub quote: &'static str,
    /// Asset path of the model, matching the preload manifest.
    pub model: &'static str,
    pub position: Vec3,
    pub scale: Vec3,
    /// Euler rotation in radians (x, y, z).
    pub rotation: Vec3,
}

/// The full cast, in carousel order.
pub const CAST: [CharacterEntry; 6] = [
    CharacterEntry {
        name: "Le Petit Prince",
        description: "Un jeune garçon venu d’un petit astéroïde, le B-612. Curieux et rêveur, \
            il pose des questions profondes sur l’amitié, l’amour et le sens de la vie. En \
            voyageant de planète en planète, il découvre les travers des adultes et cherche à \
            comprendre ce qui est vraiment important.",
        quote: "On ne voit bien qu’avec le cœur.",
        model: "models/character1.glb",
        position: Vec3::new(1.0, -3.4, -2.0),
        scale: Vec3::new(10.0, 10.0, 10.0),
        rotation: Vec3::new(0.0, 16.0, 0.0),
    },
    CharacterEntry {
        name: "La Rose",
        description: "La Rose est unique pour le Petit Prince, bien qu'elle ressemble aux \
            autres fleurs. Elle est coquette, exigeante, parfois capricieuse, mais elle aime \
            profondément le Petit Prince. À travers elle, il comprend que l’amour est une \
            responsabilité et qu’il faut prendre soin de ceux qu’on aime.",
        quote: "Tu deviens responsable pour toujours de ce que tu as apprivoisé.",
        model: "models/character2.glb",
        position: Vec3::new(0.0, -0.5, 0.0),
        scale: Vec3::new(3.0, 3.0, 3.0),
        rotation: Vec3::new(0.0, -0.5, 0.0),
    },
    CharacterEntry {
        name: "Le Pilote",
        description: "Narrateur de l’histoire, c’est un aviateur tombé en panne dans le désert \
            du Sahara. Il y rencontre le Petit Prince et apprend à voir le monde autrement. À \
            travers leurs discussions, il redécouvre son âme d’enfant et la beauté des choses \
            invisibles aux yeux.",
        quote: "Toutes les grandes personnes ont d’abord été des enfants. Mais peu d’entre \
            elles s’en souviennent.",
        model: "models/character3.glb",
        position: Vec3::new(0.0, 0.2, -0.5),
        scale: Vec3::new(15.0, 15.0, 15.0),
        rotation: Vec3::new(0.0, -0.8, 0.0),
    },
    CharacterEntry {
        name: "Le Mouton",
        description: "Le Petit Prince demande au Pilote de lui dessiner un mouton. Après \
            plusieurs essais, il finit par lui donner une boîte en lui disant que le mouton \
            est à l’intérieur. Le Petit Prince, satisfait, comprend que l’essentiel ne se \
            limite pas à ce que l’on voit, mais à ce que l’on imagine.",
        quote: "S’il te plaît… dessine-moi un mouton !",
        model: "models/character4.glb",
        position: Vec3::new(-0.5, -0.05, 0.1),
        scale: Vec3::new(0.4, 0.4, 0.4),
        rotation: Vec3::new(0.0, 1.0, 0.0),
    },
    CharacterEntry {
        name: "Le Renard",
        description: "Le Renard est un sage professeur pour le Petit Prince. Il lui explique \
            l’importance de l’apprivoisement : créer des liens rend les choses précieuses. \
            Grâce à lui, le Petit Prince comprend que sa Rose est unique parce qu’il l’a aimée \
            et soignée.",
        quote: "On ne connaît que les choses que l’on apprivoise.",
        model: "models/character5.glb",
        position: Vec3::new(0.0, -0.5, -0.5),
        scale: Vec3::new(0.3, 0.3, 0.3),
        rotation: Vec3::new(0.0, -0.5, 0.0),
    },
    CharacterEntry {
        name: "Le Serpent",
        description: "Le Serpent est le premier être vivant que le Petit Prince rencontre sur \
            Terre. Il parle par énigmes et évoque un moyen de ‘retourner chez soi’. Sa morsure \
            représente à la fois une fin et un retour à l’essentiel, au-delà du monde visible.",
        quote: "Je puis t’aider à retourner chez toi...",
        model: "models/character6.glb",
        position: Vec3::new(0.0, -0.6, 0.0),
        scale: Vec3::new(0.15, 0.15, 0.15),
        rotation: Vec3::new(0.0, 1.2, 0.0),
    },
];

/// Entry at a carousel index (callers keep indices in bounds via modulo).
pub fn entry(index: usize) -> &'static CharacterEntry {
    &CAST[index % CAST.len()]
}
