//! Decoding from parsed tabular rows to [`StoreRecord`]s.
//!
//! Coercion is keyed on header name: `id` parses as an integer, `isPremium`
//! as the feed's boolean flag, `tags` as a delimited list; every other known
//! header stays a raw trimmed string. Missing or malformed fields fall back
//! to per-field defaults (`0` / `false` / `[]` / `""`) — a bad row never
//! aborts the load. Headers outside the known schema are ignored.

use pcmap_core::{parse_premium_flag, split_tags, StoreRecord};

use crate::tabular::{parse_table, Table};

/// Decodes every row of a parsed table into a [`StoreRecord`].
#[must_use]
pub fn decode_stores(table: &Table) -> Vec<StoreRecord> {
    (0..table.row_count())
        .map(|row| decode_row(table, row))
        .collect()
}

/// Convenience: parse raw feed text and decode in one step.
///
/// Returns an empty vec when the text has no header or no data rows; the
/// caller decides whether an empty result is worth acting on.
#[must_use]
pub fn parse_stores(text: &str) -> Vec<StoreRecord> {
    parse_table(text).map_or_else(Vec::new, |table| decode_stores(&table))
}

fn decode_row(table: &Table, row: usize) -> StoreRecord {
    let text = |header: &str| table.field(row, header).unwrap_or("").to_string();

    StoreRecord {
        id: table
            .field(row, "id")
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(0),
        name: text("name"),
        is_premium: table.field(row, "isPremium").is_some_and(parse_premium_flag),
        region: text("region"),
        sub_region: text("subRegion"),
        address: text("address"),
        thumbnail_url: text("thumbnailUrl"),
        description: text("description"),
        tags: table.field(row, "tags").map(split_tags).unwrap_or_default(),
        naver_link: text("naverLink"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_HEADER: &str =
        "id,name,isPremium,region,subRegion,address,thumbnailUrl,description,tags,naverLink";

    #[test]
    fn full_row_decodes_field_for_field() {
        let text = format!(
            "{FULL_HEADER}\n7,구사컴퓨터,TRUE,경기,수원시,경기도 수원시 장안구,https://example.com/a.jpg,수원 1등,조립컴퓨터/무료청소,naver.me/x"
        );
        let stores = parse_stores(&text);
        assert_eq!(stores.len(), 1);
        let store = &stores[0];
        assert_eq!(store.id, 7);
        assert_eq!(store.name, "구사컴퓨터");
        assert!(store.is_premium);
        assert_eq!(store.region, "경기");
        assert_eq!(store.sub_region, "수원시");
        assert_eq!(store.tags, vec!["조립컴퓨터", "무료청소"]);
        assert_eq!(store.naver_link, "naver.me/x");
        assert_eq!(store.external_link(), "https://naver.me/x");
    }

    #[test]
    fn quoted_name_with_comma_and_slash_tags() {
        let stores = parse_stores("id,name,tags\n1,\"Acme, Inc.\",a/b");
        assert_eq!(stores.len(), 1);
        assert_eq!(stores[0].name, "Acme, Inc.");
        assert_eq!(stores[0].tags, vec!["a", "b"]);
    }

    #[test]
    fn short_row_defaults_missing_trailing_fields() {
        let stores = parse_stores("name,id,isPremium,tags\n강남수리");
        assert_eq!(stores.len(), 1);
        let store = &stores[0];
        assert_eq!(store.name, "강남수리");
        assert_eq!(store.id, 0);
        assert!(!store.is_premium);
        assert!(store.tags.is_empty());
        assert_eq!(store.region, "");
    }

    #[test]
    fn bad_integer_defaults_to_zero() {
        let stores = parse_stores("id,name\nabc,x\n-12,y");
        assert_eq!(stores[0].id, 0);
        assert_eq!(stores[1].id, -12);
    }

    #[test]
    fn premium_coercion_follows_the_flag_rule() {
        let stores = parse_stores("id,isPremium\n1,true\n2, TRUE \n3,1\n4,\n5,false");
        let flags: Vec<bool> = stores.iter().map(|s| s.is_premium).collect();
        assert_eq!(flags, vec![true, true, false, false, false]);
    }

    #[test]
    fn unknown_headers_are_ignored() {
        let stores = parse_stores("id,name,rating\n3,Acme,4.8");
        assert_eq!(stores.len(), 1);
        assert_eq!(stores[0].id, 3);
        assert_eq!(stores[0].name, "Acme");
    }

    #[test]
    fn duplicate_ids_are_kept() {
        let stores = parse_stores("id,name\n1,first\n1,second");
        assert_eq!(stores.len(), 2);
        assert_eq!(stores[0].id, stores[1].id);
    }

    #[test]
    fn headerless_or_empty_text_yields_no_stores() {
        assert!(parse_stores("").is_empty());
        assert!(parse_stores(FULL_HEADER).is_empty());
    }

    /// Serializing a record set back to feed text and re-parsing it must
    /// reproduce the records field-for-field.
    #[test]
    fn serialize_then_parse_round_trips() {
        let originals = pcmap_core::seed_stores();
        let mut text = String::from(FULL_HEADER);
        for s in &originals {
            text.push_str(&format!(
                "\n{},{},{},{},{},\"{}\",{},{},{},{}",
                s.id,
                s.name,
                if s.is_premium { "TRUE" } else { "FALSE" },
                s.region,
                s.sub_region,
                s.address,
                s.thumbnail_url,
                s.description,
                s.tags.join("/"),
                s.naver_link,
            ));
        }
        assert_eq!(parse_stores(&text), originals);
    }
}
