//! The fixed two-level region taxonomy used for navigation and filtering.
//!
//! Seventeen top-level regions, each with an ordered sub-region list. Static
//! for the process lifetime; purely names for filtering, no geocoding.

/// One top-level region and its ordered sub-regions.
#[derive(Debug, PartialEq, Eq)]
pub struct Region {
    pub name: &'static str,
    pub sub_regions: &'static [&'static str],
}

/// All top-level regions, in display order (서울 first).
pub static REGIONS: &[Region] = &[
    Region {
        name: "서울",
        sub_regions: &[
            "강남구", "강동구", "강북구", "강서구", "관악구", "광진구", "구로구", "금천구",
            "노원구", "도봉구", "동대문구", "동작구", "마포구", "서대문구", "서초구", "성동구",
            "성북구", "송파구", "양천구", "영등포구", "용산구", "은평구", "종로구", "중구",
            "중랑구",
        ],
    },
    Region {
        name: "경기",
        sub_regions: &[
            "수원시", "성남시", "고양시", "용인시", "부천시", "안산시", "안양시", "남양주시",
            "화성시", "평택시", "의정부시", "파주시", "시흥시", "김포시", "광명시", "광주시",
            "군포시", "이천시", "오산시", "하남시", "양주시", "구리시", "안성시", "포천시",
            "의왕시", "여주시", "양평군", "가평군", "연천군",
        ],
    },
    Region {
        name: "인천",
        sub_regions: &[
            "부평구", "남동구", "연수구", "미추홀구", "서구", "계양구", "중구", "동구",
            "강화군", "옹진군",
        ],
    },
    Region {
        name: "부산",
        sub_regions: &[
            "해운대구", "부산진구", "동래구", "남구", "북구", "사하구", "금정구", "연제구",
            "수영구", "사상구", "기장군", "중구", "동구", "서구", "영도구", "강서구",
        ],
    },
    Region {
        name: "대전",
        sub_regions: &["유성구", "서구", "중구", "동구", "대덕구"],
    },
    Region {
        name: "대구",
        sub_regions: &[
            "중구", "동구", "서구", "남구", "북구", "수성구", "달서구", "달성군",
        ],
    },
    Region {
        name: "광주",
        sub_regions: &["동구", "서구", "남구", "북구", "광산구"],
    },
    Region {
        name: "울산",
        sub_regions: &["중구", "남구", "동구", "북구", "울주군"],
    },
    Region {
        name: "세종",
        sub_regions: &["세종특별자치시"],
    },
    Region {
        name: "강원",
        sub_regions: &[
            "춘천시", "원주시", "강릉시", "동해시", "태백시", "속초시", "삼척시",
        ],
    },
    Region {
        name: "충북",
        sub_regions: &[
            "청주시", "충주시", "제천시", "보은군", "옥천군", "영동군", "증평군", "진천군",
            "괴산군", "음성군", "단양군",
        ],
    },
    Region {
        name: "충남",
        sub_regions: &[
            "천안시", "공주시", "보령시", "아산시", "서산시", "논산시", "계룡시", "당진시",
            "금산군", "부여군", "서천군", "청양군", "홍성군", "예산군", "태안군",
        ],
    },
    Region {
        name: "전북",
        sub_regions: &[
            "전주시", "군산시", "익산시", "정읍시", "남원시", "김제시", "완주군", "고창군",
            "부안군",
        ],
    },
    Region {
        name: "전남",
        sub_regions: &[
            "목포시", "여수시", "순천시", "나주시", "광양시", "담양군", "화순군", "해남군",
            "무안군", "영광군", "완도군",
        ],
    },
    Region {
        name: "경북",
        sub_regions: &[
            "포항시", "경주시", "김천시", "안동시", "구미시", "영주시", "영천시", "상주시",
            "문경시", "경산시", "칠곡군", "울진군",
        ],
    },
    Region {
        name: "경남",
        sub_regions: &[
            "창원시", "진주시", "통영시", "사천시", "김해시", "밀양시", "거제시", "양산시",
            "함안군", "거창군",
        ],
    },
    Region {
        name: "제주",
        sub_regions: &["제주시", "서귀포시"],
    },
];

/// Looks up a region by exact name.
#[must_use]
pub fn find_region(name: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn taxonomy_has_seventeen_regions_seoul_first() {
        assert_eq!(REGIONS.len(), 17);
        assert_eq!(REGIONS[0].name, "서울");
    }

    #[test]
    fn region_names_are_unique() {
        let names: HashSet<_> = REGIONS.iter().map(|r| r.name).collect();
        assert_eq!(names.len(), REGIONS.len());
    }

    #[test]
    fn every_region_has_sub_regions() {
        for region in REGIONS {
            assert!(
                !region.sub_regions.is_empty(),
                "region {} has no sub-regions",
                region.name
            );
        }
    }

    #[test]
    fn sub_region_order_is_preserved() {
        let seoul = find_region("서울").unwrap();
        assert_eq!(seoul.sub_regions[0], "강남구");
        let gyeonggi = find_region("경기").unwrap();
        assert_eq!(gyeonggi.sub_regions[0], "수원시");
    }

    #[test]
    fn find_region_misses_unknown_names() {
        assert!(find_region("한양").is_none());
        assert!(find_region("").is_none());
        // Sub-region names are not top-level keys.
        assert!(find_region("강남구").is_none());
    }
}
