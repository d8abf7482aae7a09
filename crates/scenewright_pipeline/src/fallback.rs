//! Deterministic scene assembly from fixed fragments.
//!
//! Used whenever the generation service is unavailable or returns too little.
//! Every feature combination yields a non-empty scene of opening, character
//! and closing paragraphs.

use scenewright_core::{Character, FeatureSet, Mood, Setting, Weather};
use tracing::{debug, instrument};

const MASP_RAIN: &str = "A chuva tamborilava contra as grandes janelas do MASP, criando um ritmo hipnótico que ecoava pelos corredores vazios do museu. As luzes da Paulista se difundiam através das gotas d'água, pintando sombras dançantes nas paredes brancas.";

const MASP: &str = "O MASP se erguia majestoso na Paulista, suas linhas modernas contrastando com o movimento constante da avenida. No interior, o silêncio era quebrado apenas pelos passos ecoando no piso de concreto polido.";

const CAFE: &str = "O café fervilhava de atividade, o aroma intenso misturando-se às conversas sobrepostas e ao tinir constante de xícaras e pratos.";

const LIBRARY: &str = "A biblioteca antiga exalava o cheiro característico de livros velhos e madeira envelhecida. A luz filtrada pelas janelas altas criava um ambiente solene e contemplativo.";

const SUBWAY: &str = "A estação de metrô pulsava com o movimento incessante de pessoas. O som dos trens chegando e partindo criava uma sinfonia urbana constante.";

const NO_SETTING: &str = "O ambiente estava carregado de expectativa, como se algo importante estivesse prestes a acontecer.";

const IVANA_AND_MANOEL: [&str; 6] = [
    "Ivana chegou primeiro, seus passos ecoando no espaço. Dr. Manoel apareceu momentos depois, o semblante grave.",
    "\"Você veio,\" disse Ivana.",
    "\"Tinha que vir,\" respondeu Dr. Manoel. \"Precisamos resolver isso.\"",
    "O silêncio se estendeu entre eles, carregado de tensão.",
    "\"Então você sabe a verdade,\" ela disse.",
    "\"Sei mais do que você imagina,\" ele respondeu, dando um passo à frente.",
];

const FATHER_AND_DAUGHTER: [&str; 2] = [
    "O pai chegou pontualmente, como sempre. Sua filha já estava lá, mexendo nervosamente no celular, evitando o olhar direto que sabia que viria.",
    "Quando seus olhos finalmente se encontraram, ambos souberam que aquela conversa não poderia ser adiada por mais tempo.",
];

const GENERIC_CHARACTERS: &str = "Os personagens se encontraram, cada um carregando suas próprias intenções. A conversa que se seguiu revelaria verdades há muito escondidas.";

const RAIN_CLOSING: &str = "Lá fora, a chuva continuava caindo, mas algo havia mudado entre eles. O que aconteceria a seguir dependeria das escolhas que cada um faria.";

const TENSE_CLOSING: &str = "O encontro chegava ao fim, mas as questões levantadas ecoariam por muito tempo. Algumas palavras, uma vez ditas, não podem ser desfeitas.";

const GENERIC_CLOSING: &str = "Quando se separaram, ambos sabiam que nada seria como antes. As palavras trocadas ecoariam por muito tempo.";

/// Setting name with its article, as used inside the rainy opening.
fn articled(setting: Option<Setting>) -> &'static str {
    match setting {
        Some(Setting::Masp) => "o MASP",
        Some(Setting::Library) => "a biblioteca antiga",
        Some(Setting::Cafe) => "o café movimentado",
        Some(Setting::Subway) => "a estação de metrô",
        None => "o lugar",
    }
}

fn opening(features: &FeatureSet) -> String {
    match (features.weather, features.setting) {
        (Some(Weather::Rain), Some(Setting::Masp)) => MASP_RAIN.to_string(),
        (Some(Weather::Rain), setting) => format!(
            "A chuva caía pesadamente sobre a cidade, criando uma cortina de água que transformava {} em um refúgio isolado do mundo exterior.",
            articled(setting)
        ),
        (_, Some(Setting::Masp)) => MASP.to_string(),
        (_, Some(Setting::Cafe)) => CAFE.to_string(),
        (_, Some(Setting::Library)) => LIBRARY.to_string(),
        (_, Some(Setting::Subway)) => SUBWAY.to_string(),
        (_, None) => NO_SETTING.to_string(),
    }
}

fn characters(features: &FeatureSet) -> Vec<&'static str> {
    if features.has_all(&[Character::Ivana, Character::DrManoel]) {
        IVANA_AND_MANOEL.to_vec()
    } else if features.has_all(&[Character::Father, Character::Daughter]) {
        FATHER_AND_DAUGHTER.to_vec()
    } else {
        vec![GENERIC_CHARACTERS]
    }
}

fn closing(features: &FeatureSet) -> &'static str {
    if features.weather == Some(Weather::Rain) {
        RAIN_CLOSING
    } else if features.mood == Some(Mood::Tense) {
        TENSE_CLOSING
    } else {
        GENERIC_CLOSING
    }
}

/// Assemble a scene from the fixed fragments, paragraphs separated by a blank line.
///
/// # Examples
///
/// ```
/// use scenewright_core::FeatureSet;
/// use scenewright_pipeline::compose_fallback;
///
/// let scene = compose_fallback(&FeatureSet::default());
/// assert!(scene.starts_with("O ambiente estava carregado de expectativa"));
/// ```
#[instrument(skip(features))]
pub fn compose_fallback(features: &FeatureSet) -> String {
    let mut paragraphs = vec![opening(features)];
    paragraphs.extend(characters(features).into_iter().map(str::to_string));
    paragraphs.push(closing(features).to_string());

    debug!(paragraphs = paragraphs.len(), "Composed fallback scene");
    paragraphs.join("\n\n")
}
