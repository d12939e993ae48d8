//! State holidays for the 26 Brazilian states and the Federal District.
//!
//! The table is closed, static data.  A region is looked up either by its
//! full name (`"São Paulo"`, exact match) or by its UF code (`"SP"`, case
//! insensitive); the sentinel [`ALL_REGIONS`] expands to every region.

use std::collections::HashMap;
use std::sync::OnceLock;

use dc_time::easter_sunday;

use crate::occurrence::HolidayOccurrence;
use crate::rule::HolidayRule;

/// Selection sentinel that expands to every known region.
pub const ALL_REGIONS: &str = "Todos";

/// A federative unit and its own holidays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// Two-letter UF code.
    pub code: &'static str,
    /// Full Portuguese name; this is the value written to the `Estado` column.
    pub name: &'static str,
    /// Holidays specific to this region.
    pub rules: &'static [HolidayRule],
}

/// Every known region, alphabetical by name.
pub static REGIONS: &[Region] = &[
    Region {
        code: "AC",
        name: "Acre",
        rules: &[
            HolidayRule::fixed("Dia do Evangélico", 1, 23),
            HolidayRule::fixed("Dia Internacional da Mulher", 3, 8),
            HolidayRule::fixed("Aniversário do Acre", 6, 15),
            HolidayRule::fixed("Dia da Amazônia", 9, 5),
            HolidayRule::fixed("Assinatura do Tratado de Petrópolis", 11, 17),
        ],
    },
    Region {
        code: "AL",
        name: "Alagoas",
        rules: &[
            HolidayRule::fixed("São João", 6, 24),
            HolidayRule::fixed("São Pedro", 6, 29),
            HolidayRule::fixed("Emancipação Política de Alagoas", 9, 16),
            HolidayRule::fixed("Dia da Consciência Negra", 11, 20),
        ],
    },
    Region {
        code: "AP",
        name: "Amapá",
        rules: &[
            HolidayRule::fixed("Dia de São José", 3, 19),
            HolidayRule::fixed("São Tiago", 7, 25),
            HolidayRule::fixed("Criação do Estado do Amapá", 10, 5).since(1989),
            HolidayRule::fixed("Dia da Consciência Negra", 11, 20),
        ],
    },
    Region {
        code: "AM",
        name: "Amazonas",
        rules: &[
            HolidayRule::fixed("Elevação do Amazonas à Categoria de Província", 9, 5),
            HolidayRule::fixed("Dia da Consciência Negra", 11, 20),
            HolidayRule::fixed("Nossa Senhora da Conceição", 12, 8),
        ],
    },
    Region {
        code: "BA",
        name: "Bahia",
        rules: &[HolidayRule::fixed("Independência da Bahia", 7, 2)],
    },
    Region {
        code: "CE",
        name: "Ceará",
        rules: &[
            HolidayRule::fixed("Dia de São José", 3, 19),
            HolidayRule::fixed("Data Magna do Ceará", 3, 25),
        ],
    },
    Region {
        code: "DF",
        name: "Distrito Federal",
        rules: &[
            HolidayRule::fixed("Fundação de Brasília", 4, 21).since(1960),
            HolidayRule::fixed("Dia do Evangélico", 11, 30),
        ],
    },
    Region {
        code: "ES",
        name: "Espírito Santo",
        rules: &[HolidayRule::easter("Nossa Senhora da Penha", 8)],
    },
    Region {
        code: "GO",
        name: "Goiás",
        rules: &[HolidayRule::fixed("Dia do Servidor Público", 10, 28)],
    },
    Region {
        code: "MA",
        name: "Maranhão",
        rules: &[HolidayRule::fixed(
            "Adesão do Maranhão à Independência do Brasil",
            7,
            28,
        )],
    },
    Region {
        code: "MT",
        name: "Mato Grosso",
        rules: &[HolidayRule::fixed("Dia da Consciência Negra", 11, 20)],
    },
    Region {
        code: "MS",
        name: "Mato Grosso do Sul",
        rules: &[HolidayRule::fixed("Criação do Estado de Mato Grosso do Sul", 10, 11).since(1978)],
    },
    Region {
        code: "MG",
        name: "Minas Gerais",
        rules: &[HolidayRule::fixed("Data Magna de Minas Gerais", 4, 21)],
    },
    Region {
        code: "PA",
        name: "Pará",
        rules: &[HolidayRule::fixed(
            "Adesão do Grão-Pará à Independência do Brasil",
            8,
            15,
        )],
    },
    Region {
        code: "PB",
        name: "Paraíba",
        rules: &[
            HolidayRule::fixed("Homenagem à Memória de João Pessoa", 7, 26),
            HolidayRule::fixed("Fundação do Estado da Paraíba", 8, 5),
        ],
    },
    Region {
        code: "PR",
        name: "Paraná",
        rules: &[HolidayRule::fixed("Emancipação Política do Paraná", 12, 19)],
    },
    Region {
        code: "PE",
        name: "Pernambuco",
        rules: &[
            HolidayRule::fixed("Revolução Pernambucana", 3, 6),
            HolidayRule::fixed("São João", 6, 24),
        ],
    },
    Region {
        code: "PI",
        name: "Piauí",
        rules: &[
            HolidayRule::fixed("Dia da Batalha do Jenipapo", 3, 13),
            HolidayRule::fixed("Dia do Piauí", 10, 19),
        ],
    },
    Region {
        code: "RJ",
        name: "Rio de Janeiro",
        rules: &[
            HolidayRule::fixed("Dia de São Jorge", 4, 23),
            HolidayRule::fixed("Dia da Consciência Negra", 11, 20),
        ],
    },
    Region {
        code: "RN",
        name: "Rio Grande do Norte",
        rules: &[HolidayRule::fixed("Mártires de Cunhaú e Uruaçu", 10, 3)],
    },
    Region {
        code: "RS",
        name: "Rio Grande do Sul",
        rules: &[HolidayRule::fixed("Revolução Farroupilha", 9, 20)],
    },
    Region {
        code: "RO",
        name: "Rondônia",
        rules: &[
            HolidayRule::fixed("Criação do Estado de Rondônia", 1, 4).since(1982),
            HolidayRule::fixed("Dia do Evangélico", 6, 18),
        ],
    },
    Region {
        code: "RR",
        name: "Roraima",
        rules: &[HolidayRule::fixed("Criação do Estado de Roraima", 10, 5).since(1989)],
    },
    Region {
        code: "SC",
        name: "Santa Catarina",
        rules: &[
            HolidayRule::fixed("Criação da Capitania de Santa Catarina", 8, 11),
            HolidayRule::fixed("Dia de Santa Catarina", 11, 25),
        ],
    },
    Region {
        code: "SP",
        name: "São Paulo",
        rules: &[HolidayRule::fixed("Revolução Constitucionalista", 7, 9).since(1997)],
    },
    Region {
        code: "SE",
        name: "Sergipe",
        rules: &[HolidayRule::fixed("Emancipação Política de Sergipe", 7, 8)],
    },
    Region {
        code: "TO",
        name: "Tocantins",
        rules: &[
            HolidayRule::fixed("Autonomia do Estado de Tocantins", 3, 18).since(1989),
            HolidayRule::fixed("Nossa Senhora da Natividade", 9, 8),
            HolidayRule::fixed("Criação do Estado de Tocantins", 10, 5).since(1989),
        ],
    },
];

/// Name and upper-case code index over [`REGIONS`], built once.
fn index() -> &'static HashMap<String, &'static Region> {
    static INDEX: OnceLock<HashMap<String, &'static Region>> = OnceLock::new();
    INDEX.get_or_init(|| {
        REGIONS
            .iter()
            .flat_map(|r| [(r.name.to_string(), r), (r.code.to_string(), r)])
            .collect()
    })
}

/// Look up a region by full name or UF code.
pub fn find_region(id: &str) -> Option<&'static Region> {
    let id = id.trim();
    index()
        .get(id)
        .or_else(|| index().get(&id.to_ascii_uppercase()))
        .copied()
}

/// Expand a selection of identifiers into distinct regions.
///
/// Selection order is kept, duplicates are dropped, [`ALL_REGIONS`] expands
/// to the whole table, and unknown identifiers are ignored.
pub fn resolve_regions<S: AsRef<str>>(ids: &[S]) -> Vec<&'static Region> {
    let mut out: Vec<&'static Region> = Vec::new();
    for id in ids {
        let id = id.as_ref();
        let found: Vec<&'static Region> = if id.trim().eq_ignore_ascii_case(ALL_REGIONS) {
            REGIONS.iter().collect()
        } else if let Some(region) = find_region(id) {
            vec![region]
        } else {
            log::debug!("ignoring unknown region {id:?}");
            continue;
        };
        for region in found {
            if !out.iter().any(|r| r.code == region.code) {
                out.push(region);
            }
        }
    }
    out
}

/// Holidays observed in `year` by the selected regions.
///
/// One occurrence per active rule per region, tagged with the region's full
/// name.  Regions come in selection order, rules in table order.
pub fn regional_holidays<S: AsRef<str>>(year: u16, regions: &[S]) -> Vec<HolidayOccurrence> {
    region_holidays(year, &resolve_regions(regions))
}

/// Holidays observed in `year` by already-resolved regions.
pub fn region_holidays(year: u16, regions: &[&'static Region]) -> Vec<HolidayOccurrence> {
    if regions.is_empty() {
        return Vec::new();
    }
    let easter = easter_sunday(year);
    let out: Vec<HolidayOccurrence> = regions
        .iter()
        .flat_map(|region| {
            region.rules.iter().filter_map(move |rule| {
                rule.resolve(year, easter)
                    .map(|date| HolidayOccurrence::regional(date, rule.name, region.name))
            })
        })
        .collect();
    log::debug!(
        "{} regional holidays in {year} across {} regions",
        out.len(),
        regions.len()
    );
    out
}
