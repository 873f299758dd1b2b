//! Fixed legal text documents, exposed by key lookup to the presentation
//! collaborator. No computation.

use std::str::FromStr;

use thiserror::Error;

/// A named legal document.
#[derive(Debug, PartialEq, Eq)]
pub struct LegalDoc {
    pub title: &'static str,
    pub body: &'static str,
}

/// Key for looking up a legal document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalKey {
    Terms,
    Privacy,
}

impl std::fmt::Display for LegalKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LegalKey::Terms => write!(f, "terms"),
            LegalKey::Privacy => write!(f, "privacy"),
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown legal document key: {0}")]
pub struct UnknownLegalKey(pub String);

impl FromStr for LegalKey {
    type Err = UnknownLegalKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "terms" | "tos" => Ok(LegalKey::Terms),
            "privacy" => Ok(LegalKey::Privacy),
            other => Err(UnknownLegalKey(other.to_string())),
        }
    }
}

static TERMS: LegalDoc = LegalDoc {
    title: "이용약관",
    body: "제1조 (목적): 본 약관은 'PC맵'이 제공하는 매장 정보 공유 서비스의 이용 조건 및 절차에 관한 사항을 규정함을 목적으로 합니다.\n\n\
제2조 (정보의 제공): 서비스는 네이버 플레이스 데이터를 기반으로 하며, 실제 운영 상태와 차이가 있을 수 있습니다. 방문 전 확인은 이용자의 책임입니다.\n\n\
제3조 (책임의 제한): 본 서비스는 정보 중개 플랫폼으로, 이용자와 수리점 간의 거래 및 분쟁에 대해 법적 책임을 지지 않습니다.",
};

static PRIVACY: LegalDoc = LegalDoc {
    title: "개인정보처리방침",
    body: "수집 항목: 제휴 문의 시 성함, 연락처, 매장명.\n\n\
수집 목적: 광고 및 제휴 상담 진행.\n\n\
보유 기간: 상담 완료 후 1년 내 파기(관련 법령에 의거 보관 필요 시 예외).",
};

/// Looks up the document for a key.
#[must_use]
pub fn legal_doc(key: LegalKey) -> &'static LegalDoc {
    match key {
        LegalKey::Terms => &TERMS,
        LegalKey::Privacy => &PRIVACY,
    }
}
