//! Built-in fallback dataset.
//!
//! Shown immediately at startup and retained whenever the external feed is
//! unreachable or parses to zero rows, so the listing is never empty solely
//! because a load failed.

use crate::stores::StoreRecord;

/// Returns a fresh copy of the built-in seed records.
#[must_use]
pub fn seed_stores() -> Vec<StoreRecord> {
    vec![
        StoreRecord {
            id: 1,
            name: "강남 마스터 PC 수리".to_string(),
            is_premium: false,
            region: "서울".to_string(),
            sub_region: "강남구".to_string(),
            address: "서울특별시 강남구 테헤란로 427".to_string(),
            thumbnail_url: "https://images.unsplash.com/photo-1591405351990-4726e331f141?w=800"
                .to_string(),
            description: "국가공인 PC 정비사가 직접 운영하는 강남 1등 수리점입니다. 정찰제 도입으로 투명합니다."
                .to_string(),
            tags: vec![
                "당일수리".to_string(),
                "정품사용".to_string(),
                "무료진단".to_string(),
            ],
            naver_link: "https://map.naver.com".to_string(),
        },
        StoreRecord {
            id: 2,
            name: "구사컴퓨터".to_string(),
            is_premium: true,
            region: "경기".to_string(),
            sub_region: "수원시".to_string(),
            address: "경기도 수원시 장안구 일월로76번길 10-4 1층".to_string(),
            thumbnail_url: "https://search.pstatic.net/common/?src=https%3A%2F%2Fldb-phinf.pstatic.net%2F20241023_55%2F1729673110572pvXKB_JPEG%2FR0004913.JPG"
                .to_string(),
            description: "수원 1등 조립컴퓨터 및 수리 전문점. 네이버 평점 최고점을 기록 중인 검증된 업체입니다."
                .to_string(),
            tags: vec![
                "조립컴퓨터".to_string(),
                "컴퓨터수리".to_string(),
                "무료청소".to_string(),
            ],
            naver_link: "https://naver.me/FJbYgwxg".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regions::find_region;

    #[test]
    fn seed_records_fall_under_known_regions() {
        for record in seed_stores() {
            let region = find_region(&record.region)
                .unwrap_or_else(|| panic!("seed record {} has unknown region", record.id));
            assert!(
                region.sub_regions.contains(&record.sub_region.as_str()),
                "seed record {} has unknown sub-region {}",
                record.id,
                record.sub_region
            );
        }
    }

    #[test]
    fn seed_returns_equal_fresh_copies() {
        assert_eq!(seed_stores(), seed_stores());
    }
}
