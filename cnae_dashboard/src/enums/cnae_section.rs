use crate::common::*;

#[doc = r#"
    CNAE 5자리 코드의 앞자리 범위로 결정되는 경제활동 섹션.

    `Ord` 는 섹션 라벨의 사전순을 따른다. 필터 옵션 목록과 차트의 X축 순서가
    라벨 정렬을 기준으로 하기 때문이다.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CnaeSection {
    Agriculture,
    Extractive,
    Manufacturing,
    ElectricityGas,
    WaterSewage,
    Construction,
    Commerce,
    Transport,
    Accommodation,
    Information,
    Financial,
    RealEstate,
    Professional,
    Administrative,
    PublicAdministration,
    Education,
    Health,
    Arts,
    OtherServices,
    Domestic,
    International,
    Unclassified,
}

/* (하한, 상한, 섹션) - 상하한 모두 포함, 구간끼리 겹치지 않는다 */
const SECTION_RANGES: [(u32, u32, CnaeSection); 21] = [
    (1000, 3999, CnaeSection::Agriculture),
    (5000, 9999, CnaeSection::Extractive),
    (10000, 33999, CnaeSection::Manufacturing),
    (35000, 35999, CnaeSection::ElectricityGas),
    (36000, 39999, CnaeSection::WaterSewage),
    (41000, 43999, CnaeSection::Construction),
    (45000, 47999, CnaeSection::Commerce),
    (49000, 53999, CnaeSection::Transport),
    (55000, 56999, CnaeSection::Accommodation),
    (58000, 63999, CnaeSection::Information),
    (64000, 66999, CnaeSection::Financial),
    (68000, 68999, CnaeSection::RealEstate),
    (69000, 75999, CnaeSection::Professional),
    (77000, 82999, CnaeSection::Administrative),
    (84000, 84999, CnaeSection::PublicAdministration),
    (85000, 85999, CnaeSection::Education),
    (86000, 88999, CnaeSection::Health),
    (90000, 93999, CnaeSection::Arts),
    (94000, 96999, CnaeSection::OtherServices),
    (97000, 97999, CnaeSection::Domestic),
    (99000, 99999, CnaeSection::International),
];

impl CnaeSection {
    pub const ALL: [CnaeSection; 22] = [
        CnaeSection::Agriculture,
        CnaeSection::Extractive,
        CnaeSection::Manufacturing,
        CnaeSection::ElectricityGas,
        CnaeSection::WaterSewage,
        CnaeSection::Construction,
        CnaeSection::Commerce,
        CnaeSection::Transport,
        CnaeSection::Accommodation,
        CnaeSection::Information,
        CnaeSection::Financial,
        CnaeSection::RealEstate,
        CnaeSection::Professional,
        CnaeSection::Administrative,
        CnaeSection::PublicAdministration,
        CnaeSection::Education,
        CnaeSection::Health,
        CnaeSection::Arts,
        CnaeSection::OtherServices,
        CnaeSection::Domestic,
        CnaeSection::International,
        CnaeSection::Unclassified,
    ];

    #[doc = "CNAE 코드를 섹션으로 분류한다. 어떤 구간에도 속하지 않으면 `Unclassified`."]
    pub fn classify(cnae: u32) -> Self {
        SECTION_RANGES
            .iter()
            .find(|(low, high, _)| (*low..=*high).contains(&cnae))
            .map(|(_, _, section)| *section)
            .unwrap_or(CnaeSection::Unclassified)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CnaeSection::Agriculture => {
                "Agricultura, Pecuária, Produção Florestal, Pesca e Aquicultura"
            }
            CnaeSection::Extractive => "Indústrias Extrativas",
            CnaeSection::Manufacturing => "Indústrias de Transformação",
            CnaeSection::ElectricityGas => "Eletricidade e Gás",
            CnaeSection::WaterSewage => {
                "Água, Esgoto, Atividades de Gestão de Resíduos e Descontaminação"
            }
            CnaeSection::Construction => "Construção",
            CnaeSection::Commerce => "Comércio, Reparação de Veículos Automotores e Motocicletas",
            CnaeSection::Transport => "Transporte, Armazenagem e Correio",
            CnaeSection::Accommodation => "Alojamento e Alimentação",
            CnaeSection::Information => "Informação e Comunicação",
            CnaeSection::Financial => "Atividades Financeiras, de Seguros e Serviços Relacionados",
            CnaeSection::RealEstate => "Atividades Imobiliárias",
            CnaeSection::Professional => "Atividades Profissionais, Científicas e Técnicas",
            CnaeSection::Administrative => "Atividades Administrativas e Serviços Complementares",
            CnaeSection::PublicAdministration => {
                "Administração Pública, Defesa e Seguridade Social"
            }
            CnaeSection::Education => "Educação",
            CnaeSection::Health => "Saúde Humana e Serviços Sociais",
            CnaeSection::Arts => "Artes, Cultura, Esporte e Recreação",
            CnaeSection::OtherServices => "Outras Atividades de Serviços",
            CnaeSection::Domestic => "Serviços Domésticos",
            CnaeSection::International => {
                "Organismos Internacionais e Outras Instituições Extraterritoriais"
            }
            CnaeSection::Unclassified => "Não classificado",
        }
    }
}

impl fmt::Display for CnaeSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CnaeSection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();

        CnaeSection::ALL
            .iter()
            .find(|section| section.label() == trimmed)
            .copied()
            .ok_or_else(|| anyhow!("[CnaeSection->from_str] Unknown CNAE section: '{}'", s))
    }
}

impl PartialOrd for CnaeSection {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CnaeSection {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.label().cmp(other.label())
    }
}

impl Serialize for CnaeSection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_range_bounds() {
        assert_eq!(CnaeSection::classify(1000), CnaeSection::Agriculture);
        assert_eq!(CnaeSection::classify(3999), CnaeSection::Agriculture);
        assert_eq!(CnaeSection::classify(10000), CnaeSection::Manufacturing);
        assert_eq!(CnaeSection::classify(33999), CnaeSection::Manufacturing);
        assert_eq!(CnaeSection::classify(47110), CnaeSection::Commerce);
        assert_eq!(CnaeSection::classify(68102), CnaeSection::RealEstate);
        assert_eq!(CnaeSection::classify(99000), CnaeSection::International);
        assert_eq!(CnaeSection::classify(99999), CnaeSection::International);
    }

    #[test]
    fn classify_gaps_are_unclassified() {
        for code in [0, 999, 4000, 4999, 34000, 40000, 44000, 48000, 54000, 57000, 67000, 76000, 83000, 89000, 98000, 100000] {
            assert_eq!(
                CnaeSection::classify(code),
                CnaeSection::Unclassified,
                "code {} should be unclassified",
                code
            );
        }
    }

    #[test]
    fn every_section_parses_back_from_its_label() {
        for section in CnaeSection::ALL {
            assert_eq!(section.label().parse::<CnaeSection>().unwrap(), section);
        }
        assert!("Mineração".parse::<CnaeSection>().is_err());
    }

    #[test]
    fn ordering_follows_labels() {
        let mut sections: Vec<CnaeSection> =
            vec![CnaeSection::Education, CnaeSection::Construction, CnaeSection::Agriculture];
        sections.sort();
        assert_eq!(
            sections,
            vec![CnaeSection::Agriculture, CnaeSection::Construction, CnaeSection::Education]
        );
    }
}
