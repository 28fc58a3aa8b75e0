//! Per-language product detail tables used by the product modal.

use crate::error::SiteError;
use crate::i18n::Lang;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductId {
    SmallTub,
    LargeTub,
    GummyStrip,
}

impl ProductId {
    pub const ALL: [ProductId; 3] = [ProductId::SmallTub, ProductId::LargeTub, ProductId::GummyStrip];

    /// Identifier used by `data-product` attributes.
    pub fn key(self) -> &'static str {
        match self {
            ProductId::SmallTub => "producto1",
            ProductId::LargeTub => "producto2",
            ProductId::GummyStrip => "producto4",
        }
    }
}

impl FromStr for ProductId {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "producto1" => Ok(ProductId::SmallTub),
            "producto2" => Ok(ProductId::LargeTub),
            "producto4" => Ok(ProductId::GummyStrip),
            other => Err(SiteError::UnknownProduct(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductRecord {
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub image: &'static str,
    pub details: &'static [&'static str],
}

impl ProductRecord {
    /// Rendered when a caller asks for a product that is not in the tables.
    pub const EMPTY: ProductRecord = ProductRecord {
        title: "",
        description: "",
        price: "",
        image: "",
        details: &[],
    };

    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
    }
}

/// Image shown when a product picture fails to load.
pub const FALLBACK_IMAGE: &str = "imag/default-product.png";

static SMALL_TUB_ES: ProductRecord = ProductRecord {
    title: "Tarrina Pequeña",
    description: "Nuestra tarrina pequeña reúne gelatinas de maracuyá, fresa y chicle en un formato práctico y cómodo. Sus sabores intensos, colores vivos y textura suave hacen que cada bocado sea una experiencia alegre y refrescante. Perfecta para disfrutar de un dulce rápido, para niños o como detalle irresistible.",
    price: "$0.50",
    image: "imag/TarrinaP.png",
    details: &[
        "Colores: Multicolor brillante",
        "Duración del sabor: 5-7 minutos",
        "Contenido: 15 gelatinas",
    ],
};

static SMALL_TUB_EN: ProductRecord = ProductRecord {
    title: "Small Tub",
    description: "Our small cup features a colourful mix of passion fruit, strawberry and bubblegum gummies in a convenient, easy-to-enjoy format. With vibrant colours, a soft and chewy texture, and bold flavours, it’s the perfect option for a quick sweet snack, kids’ treats or a delightful little indulgence.",
    price: "$0.50",
    image: "imag/TarrinaP.png",
    details: &[
        "Colors: Bright multicolor",
        "Taste duration: 5-7 minutes",
        "Content: 15 jelly candies",
    ],
};

static LARGE_TUB_ES: ProductRecord = ProductRecord {
    title: "Tarrina Grande",
    description: "La tarrina grande es ideal para los amantes de las gelatinas. Incluye una generosa selección de sabores maracuyá, fresa y chicle, combinando notas tropicales, dulces y divertidas. Su tamaño es perfecto para compartir en reuniones, fiestas o simplemente para disfrutar durante más tiempo de su textura elástica y sabor intenso.",
    price: "$1.00",
    image: "imag/TarrinaG.png",
    details: &[
        "Refrescante y vibrante",
        "Perfecto para compartir",
        "Contenido: 30 gelatinas",
    ],
};

static LARGE_TUB_EN: ProductRecord = ProductRecord {
    title: "Large Tub",
    description: "The large cup is made for true gummy lovers. It offers a generous assortment of passion fruit, strawberry and bubblegum flavours, blending tropical freshness with sweet and playful notes. Its bigger size makes it perfect for sharing at parties, gatherings or enjoying over time, with a chewy texture and irresistible taste in every bite.",
    price: "$1.00",
    image: "imag/TarrinaG.png",
    details: &[
        "Refreshing and vibrant",
        "Perfect for sharing",
        "Content: 30 jelly candies",
    ],
};

static GUMMY_STRIP_ES: ProductRecord = ProductRecord {
    title: "Tira de Gelatinas",
    description: "Nuestra tira de gelatinas ofrece una divertida combinación de maracuyá, fresa y chicle en un formato alargado y fácil de disfrutar. Su textura suave y elástica, junto a sus colores llamativos y sabores dulces, la convierten en un snack ideal para cualquier ocasión, aportando diversión y sabor en cada mordisco.",
    price: "$1.50",
    image: "imag/Tiras.png",
    details: &[
        "Contiene: Sorpresas en el interior",
        "Textura: Suave y masticable",
        "Perfecto para fiestas",
        "Contenido: 8 tiras",
    ],
};

static GUMMY_STRIP_EN: ProductRecord = ProductRecord {
    title: "Strip of Gummies",
    description: "Our gummy strip combines passion fruit, strawberry and bubblegum flavours in a long, playful format that’s easy and fun to eat. Its soft, stretchy texture and bright colours make it a perfect snack for any occasion, delivering sweetness, flavour and enjoyment in every bite.",
    price: "$1.50",
    image: "imag/Tiras.png",
    details: &[
        "Contains: Surprises inside",
        "Texture: Soft and chewy",
        "Perfect for parties",
        "Content: 8 strips",
    ],
};

pub fn record(lang: Lang, id: ProductId) -> &'static ProductRecord {
    match (lang, id) {
        (Lang::Es, ProductId::SmallTub) => &SMALL_TUB_ES,
        (Lang::En, ProductId::SmallTub) => &SMALL_TUB_EN,
        (Lang::Es, ProductId::LargeTub) => &LARGE_TUB_ES,
        (Lang::En, ProductId::LargeTub) => &LARGE_TUB_EN,
        (Lang::Es, ProductId::GummyStrip) => &GUMMY_STRIP_ES,
        (Lang::En, ProductId::GummyStrip) => &GUMMY_STRIP_EN,
    }
}

/// Resolves a raw product key; unknown keys yield [`ProductRecord::EMPTY`].
pub fn lookup(lang: Lang, key: &str) -> &'static ProductRecord {
    match key.parse::<ProductId>() {
        Ok(id) => record(lang, id),
        Err(e) => {
            log::warn!("[modal] {e}; rendering an empty panel");
            &ProductRecord::EMPTY
        }
    }
}
