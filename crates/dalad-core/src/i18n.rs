//! Spanish/English string tables and the language switch.
//!
//! Every translatable key is a [`TextKey`] variant that carries both
//! languages, so a key can never exist in one table and be missing from the
//! other. DOM nodes reference keys by their dotted attribute name
//! (`data-i18n="nav.home"`); names that do not parse are left alone.

use crate::constants::{LANGUAGE_FLASH, LANGUAGE_REAPPLY};
use crate::error::SiteError;
use crate::state::{Command, SiteEvent};
use std::fmt;
use std::str::FromStr;

/// Local-storage key holding the chosen language code.
pub const STORAGE_KEY: &str = "siteLang";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    #[default]
    Es,
    En,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::Es => "es",
            Lang::En => "en",
        }
    }

    /// Uppercase code shown on the language button.
    pub fn label(self) -> &'static str {
        match self {
            Lang::Es => "ES",
            Lang::En => "EN",
        }
    }

    pub fn toggled(self) -> Lang {
        match self {
            Lang::Es => Lang::En,
            Lang::En => Lang::Es,
        }
    }

    /// Parses a code, falling back to Spanish for anything unsupported.
    pub fn parse_or_default(code: &str) -> Lang {
        code.parse::<Lang>().unwrap_or_else(|e: SiteError| {
            log::debug!("[i18n] {e}; using es");
            Lang::Es
        })
    }

    /// Startup language: a stored preference wins, otherwise the browser
    /// locale decides (`en*` is English, anything else Spanish).
    pub fn detect(stored: Option<&str>, navigator: Option<&str>) -> Lang {
        match stored {
            Some(code) if !code.is_empty() => Lang::parse_or_default(code),
            _ => match navigator {
                Some(locale) if locale.starts_with("en") => Lang::En,
                _ => Lang::Es,
            },
        }
    }
}

impl FromStr for Lang {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "es" => Ok(Lang::Es),
            "en" => Ok(Lang::En),
            other => Err(SiteError::UnsupportedLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

macro_rules! text_keys {
    ($($variant:ident = $attr:literal { es: $es:expr, en: $en:expr $(,)? }),* $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum TextKey {
            $($variant),*
        }

        impl TextKey {
            pub const ALL: &'static [TextKey] = &[$(TextKey::$variant),*];

            /// Dotted name used in `data-i18n` attributes.
            pub fn attr(self) -> &'static str {
                match self {
                    $(TextKey::$variant => $attr),*
                }
            }

            pub fn text(self, lang: Lang) -> &'static str {
                match (self, lang) {
                    $(
                        (TextKey::$variant, Lang::Es) => $es,
                        (TextKey::$variant, Lang::En) => $en,
                    )*
                }
            }
        }

        impl FromStr for TextKey {
            type Err = SiteError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($attr => Ok(TextKey::$variant),)*
                    other => Err(SiteError::UnknownTextKey(other.to_string())),
                }
            }
        }
    };
}

text_keys! {
    SiteTitle = "siteTitle" {
        es: "DALAD - Mundo de Dulces Mágicos",
        en: "DALAD - Magical Sweets World",
    },
    NavHome = "nav.home" { es: "Inicio", en: "Home" },
    NavProducts = "nav.products" { es: "Productos", en: "Products" },
    NavBrands = "nav.brands" { es: "Tiendas", en: "Stores" },
    NavContact = "nav.contact" { es: "Conócenos", en: "About Us" },
    NavOrder = "nav.order" { es: "Diseño Personalizado", en: "Custom Design" },
    HeroBrand = "hero.brand" { es: "DALAD", en: "DALAD" },
    HeroSubtitle = "hero.subtitle" {
        es: "¡Un Mundo de Dulces Mágicos! 🍭",
        en: "A World of Magical Sweets! 🍭",
    },
    HeroDescription = "hero.description" {
        es: "Descubre sabores increíbles, colores brillantes y aventuras dulces en cada bocado",
        en: "Discover amazing flavors, bright colors and sweet adventures in every bite",
    },
    HeroCtaView = "hero.ctaView" { es: "Ver Dulces", en: "See Sweets" },
    HeroCtaVideo = "hero.ctaVideo" { es: "Ver Video", en: "Watch Video" },
    HeroScroll = "hero.scroll" { es: "", en: "" },
    AboutTitle = "about.title" {
        es: "Los Reyes de la <span class=\"highlight\">Gelatinería</span> 🐉",
        en: "The Kings of <span class=\"highlight\">Gelatine</span> 🐉",
    },
    AboutDescription = "about.description" {
        es: "En <strong>DALAD</strong> no solo hacemos gelatinas, creamos momentos mágicos. Todo comenzó hace más de 15 años, cuando las manos de mamá preparaban gelatinas especiales para compartir en familia. Aunque el tiempo pasó, ese sueño nunca se perdió… se guardó con cariño, se retomó y se transformó en algo aún más especial. Hoy, cada sabor lleva una historia, cada color representa ilusión y cada dinosaurio refleja la alegría de volver a creer en los sueños familiares. DALAD es amor, tradición y sonrisas que se comparten.",
        en: "At <strong>DALAD</strong> we don't just make gelatin, we create magical moments. It all began over 15 years ago, when mom's hands prepared special gelatin to share with the family. Although time passed, that dream was never lost... it was lovingly kept, rediscovered, and transformed into something even more special. Today, every flavor carries a story, every color represents hope, and every dinosaur reflects the joy of believing in family dreams again. DALAD is love, tradition, and shared smiles.",
    },
    StatsYearsLabel = "stats.yearsLabel" { es: "Años de Diversión", en: "Years of Fun" },
    StatsProductsLabel = "stats.productsLabel" { es: "Dulces Diferentes", en: "Different Candies" },
    StatsCountriesLabel = "stats.countriesLabel" { es: "Tiendas Disponibles", en: "Available Stores" },
    StatsSmilesLabel = "stats.smilesLabel" { es: "Sonrisas Diarias", en: "Daily Smiles" },
    ProductsTitle = "products.title" { es: "🍬 Nuestros Productos", en: "🍬 Our Products" },
    ProductsSubtitle = "products.subtitle" {
        es: "Actualmente contamos con una selección especial de dulces.",
        en: "We currently offer a special selection of sweets.",
    },
    Prod1Title = "product.prod1.title" { es: "Tarrina Pequeña", en: "Small Tub" },
    Prod1Desc = "product.prod1.desc" {
        es: "Tarrina pequeña de gelatinas de maracuyá, fresa y chicle, ideal para un capricho dulce y divertido en cualquier momento.",
        en: "Small cup of passion fruit, strawberry and bubblegum gummies, perfect for a sweet and fun treat anytime.",
    },
    Prod2Title = "product.prod2.title" { es: "Tarrina Grande", en: "Large Tub" },
    Prod2Desc = "product.prod2.desc" {
        es: "Tarrina grande de gelatinas surtidas de maracuyá, fresa y chicle, pensada para compartir y disfrutar más.",
        en: "Large cup of assorted passion fruit, strawberry and bubblegum gummies, ideal for sharing and enjoying more.",
    },
    Prod4Title = "product.prod4.title" { es: "Tira de Gelatinas", en: "Strip of Gummies" },
    Prod4Desc = "product.prod4.desc" {
        es: "Tira de gelatinas de maracuyá, fresa y chicle, colorida, flexible y llena de sabor.",
        en: "Gummy strip with passion fruit, strawberry and bubblegum flavours, colourful, flexible and full of fun.",
    },
    ProductViewDetails = "product.view" { es: "Ver detalles", en: "View details" },
    ModalClose = "modal.close" { es: "×", en: "×" },
    ModalTitle = "modal.title" { es: "Título producto", en: "Product title" },
    ModalDescription = "modal.description" {
        es: "Descripción del producto",
        en: "Product description",
    },
    ModalFeatures = "modal.features" { es: "Características:", en: "Features:" },
    ModalPrice = "modal.price" { es: "Precio:", en: "Price:" },
    ModalZoomHint = "modal.zoomHint" { es: "Haz clic para zoom", en: "Click to zoom" },
    ModalFlavor = "modal.flavor" { es: "Sabor:", en: "Flavor:" },
    ModalColors = "modal.colors" { es: "Colores:", en: "Colors:" },
    ModalDuration = "modal.duration" { es: "Duración del sabor:", en: "Taste duration:" },
    ModalContent = "modal.content" { es: "Contenido:", en: "Content:" },
    ModalContains = "modal.contains" { es: "Contiene:", en: "Contains:" },
    ModalTexture = "modal.texture" { es: "Textura:", en: "Texture:" },
    ModalPerfectFor = "modal.perfectFor" { es: "Perfecto para:", en: "Perfect for:" },
    ModalCloseBtn = "modal.closeBtn" {
        es: "<i class=\"fas fa-check\"></i> Entendido",
        en: "<i class=\"fas fa-check\"></i> Got it",
    },
    ModalCloseZoom = "modal.closeZoom" { es: "Cerrar zoom", en: "Close zoom" },
    ModalZoomIn = "modal.zoomIn" { es: "Aumentar zoom", en: "Zoom in" },
    ModalZoomOut = "modal.zoomOut" { es: "Disminuir zoom", en: "Zoom out" },
    ModalZoomReset = "modal.zoomReset" { es: "Restablecer zoom", en: "Reset zoom" },
    BrandsTitle = "brands.title" {
        es: "Encuéntranos en <span>nuestras tiendas</span> ✨",
        en: "Find us at <span>our stores</span> ✨",
    },
    BrandsSubtitle = "brands.subtitle" {
        es: "¡Haz clic en cualquier tienda para ver su ubicación en el mapa!",
        en: "Click on any store to see its location on the map!",
    },
    MapAddress = "map.address" { es: "Dirección:", en: "Address:" },
    MapDirections = "map.directions" { es: "Cómo llegar", en: "Get directions" },
    MapShowAll = "map.showAll" { es: "Ver todas", en: "Show all" },
    MapShowAllTitle = "map.showAllTitle" { es: "Ver todas las tiendas", en: "Show all stores" },
    MapShowingAll = "map.showingAll" { es: "Mostrando todas", en: "Showing all" },
    MapShowingAllTitle = "map.showingAllTitle" {
        es: "Mostrando todas las tiendas",
        en: "Showing all stores",
    },
    MapExpand = "map.expand" { es: "Expandir mapa", en: "Expand map" },
    MapCollapse = "map.collapse" { es: "Cerrar mapa", en: "Close map" },
    ContactVisionTitle = "contact.visionTitle" { es: "Visión", en: "Vision" },
    ContactVisionText = "contact.visionText" {
        es: "Ser una empresa ecuatoriana reconocida por su compromiso social y humano, brindando oportunidades de trabajo digno a personas de nuestra comunidad que atraviesan situaciones económicas difíciles. Aspiramos a crecer de manera sostenible como una fábrica artesanal, fortaleciendo el desarrollo local y demostrando que el esfuerzo, la solidaridad y la fe pueden transformar vidas y construir un futuro mejor para todos.",
        en: "To be an Ecuadorian company recognized for its social and human commitment, providing dignified work opportunities to community members facing difficult economic situations. We aspire to grow sustainably as an artisanal factory, strengthening local development and demonstrating that effort, solidarity and faith can transform lives and build a better future for all.",
    },
    ContactMissionTitle = "contact.missionTitle" { es: "Misión", en: "Mission" },
    ContactMissionText = "contact.missionText" {
        es: "Ofrecer productos artesanales de alta calidad, elaborados con dedicación y tradición, llevando el sabor único de nuestra fábrica a cada rincón del Ecuador. Nos comprometemos a trabajar con responsabilidad, pasión y valores, generando empleo, impulsando el talento local y contribuyendo al bienestar de nuestras comunidades.",
        en: "To offer high-quality artisanal products, made with dedication and tradition, bringing the unique flavor of our factory to every corner of Ecuador. We are committed to working responsibly, passionately and with values, generating employment, promoting local talent and contributing to the well-being of our communities.",
    },
    FooterLine1 = "footer.line1" {
        es: "¡Creando sonrisas dulces desde 1995! 🎉",
        en: "Creating sweet smiles since 1995! 🎉",
    },
    FooterSlogan = "footer.slogan" {
        es: "<i class=\"fas fa-heart\"></i> Hecho con amor y un toque de magia",
        en: "<i class=\"fas fa-heart\"></i> Made with love and a touch of magic",
    },
    FooterQuick = "footer.quick" {
        es: "<i class=\"fas fa-link\"></i> Enlaces Rápidos",
        en: "<i class=\"fas fa-link\"></i> Quick Links",
    },
    FooterFollow = "footer.follow" {
        es: "<i class=\"fas fa-share-alt\"></i> Síguenos",
        en: "<i class=\"fas fa-share-alt\"></i> Follow Us",
    },
    FooterCopy = "footer.copy" {
        es: "© 2024 DALAD Confitería Mágica. ¡Todos los derechos reservados para hacerte feliz! 🍬",
        en: "© 2024 DALAD Magical Confectionery. All rights reserved to make you happy! 🍬",
    },
    LangAria = "lang.aria" {
        es: "Cambiar idioma, actualmente Español",
        en: "Change language, currently English",
    },
    VideoUnmute = "video.unmute" { es: "Activar sonido", en: "Unmute" },
    VideoMute = "video.mute" { es: "Silenciar", en: "Mute" },
}

/// Looks up the text for a `data-i18n` attribute value.
pub fn lookup(lang: Lang, attr: &str) -> Option<&'static str> {
    attr.parse::<TextKey>().ok().map(|key| key.text(lang))
}

/// A node tagged with a translation key.
pub trait TextTarget {
    fn text_key(&self) -> Option<String>;
    fn replace_content(&mut self, html: &str);
}

/// Rewrites every node whose key resolves; returns how many were replaced.
pub fn translate_nodes<'a, T, I>(lang: Lang, nodes: I) -> usize
where
    T: TextTarget + 'a,
    I: IntoIterator<Item = &'a mut T>,
{
    let mut replaced = 0;
    for node in nodes {
        let Some(attr) = node.text_key() else {
            continue;
        };
        match lookup(lang, &attr) {
            Some(text) => {
                node.replace_content(text);
                replaced += 1;
            }
            None => log::debug!("[i18n] no entry for {attr:?}; leaving node untouched"),
        }
    }
    replaced
}

/// Where the chosen language is remembered between visits.
pub trait PreferenceStore {
    fn load(&self) -> Option<String>;
    fn save(&self, lang: Lang);
}

#[derive(Debug, Clone, PartialEq)]
pub enum LanguageCommand {
    /// Rewrite tagged nodes, the indicator label, title and `lang` attribute.
    ApplyTexts(Lang),
    Persist(Lang),
    FlashStart,
    FlashEnd,
}

#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
    current: Lang,
    flash_generation: u64,
}

impl TranslationStore {
    pub fn new(initial: Lang) -> Self {
        Self {
            current: initial,
            flash_generation: 0,
        }
    }

    pub fn current(&self) -> Lang {
        self.current
    }

    /// Applies a language code; unsupported codes fall back to Spanish.
    pub fn apply(&mut self, requested: &str) -> Vec<Command> {
        self.apply_lang(Lang::parse_or_default(requested))
    }

    pub fn apply_lang(&mut self, lang: Lang) -> Vec<Command> {
        self.current = lang;
        vec![
            Command::Language(LanguageCommand::ApplyTexts(lang)),
            Command::Language(LanguageCommand::Persist(lang)),
        ]
    }

    /// Flips between the two languages and flashes the button.
    pub fn toggle(&mut self) -> Vec<Command> {
        let next = self.current.toggled();
        log::info!("[i18n] {} -> {}", self.current, next);
        self.flash_generation += 1;
        let mut out = vec![Command::Language(LanguageCommand::FlashStart)];
        out.extend(self.apply_lang(next));
        out.push(Command::Schedule {
            after: LANGUAGE_FLASH,
            event: SiteEvent::LanguageFlashExpired(self.flash_generation),
        });
        out
    }

    pub fn flash_expired(&mut self, generation: u64) -> Vec<Command> {
        if generation == self.flash_generation {
            vec![Command::Language(LanguageCommand::FlashEnd)]
        } else {
            Vec::new()
        }
    }

    /// Startup pass plus a delayed re-application for content rendered late.
    pub fn startup(&mut self) -> Vec<Command> {
        let mut out = self.apply_lang(self.current);
        out.push(Command::Schedule {
            after: LANGUAGE_REAPPLY,
            event: SiteEvent::LanguageReapply,
        });
        out
    }
}
