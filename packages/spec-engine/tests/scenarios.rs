//! End-to-end tests from table rows to spec strings.

use spec_engine::{collect_specs, normalize_rows, ProductRecord, RawRow};

#[test]
fn test_plain_ingredient() {
    assert_eq!(normalize_rows(vec![RawRow::pair("재료", "쌀")]), "재료:쌀");
}

#[test]
fn test_haccp_checkmark() {
    assert_eq!(
        normalize_rows(vec![RawRow::pair("HACCP인증", "○")]),
        "인증정보:HACCP인증"
    );
}

#[test]
fn test_certification_checkmark() {
    assert_eq!(
        normalize_rows(vec![RawRow::pair("무항생제인증", "○")]),
        "인증:무항생제인증"
    );
}

#[test]
fn test_registration_month() {
    assert_eq!(
        normalize_rows(vec![RawRow::pair("등록년월", "2023.05")]),
        "등록년월일:2023.05"
    );
}

#[test]
fn test_parenthetical_origin() {
    let specs = collect_specs(vec![RawRow::pair("원산지", "수입산 (미국)")]);
    assert_eq!(specs.get("원산지"), Some("수입산"));
    assert_eq!(
        normalize_rows(vec![RawRow::pair("원산지", "수입산 (미국)")]),
        "원산지:수입산"
    );
}

#[test]
fn test_contained_value_keeps_first_seen() {
    let rows = vec![
        RawRow::pair("재료종류", "유기농"),
        RawRow::pair("재료종류", "유기농 쌀"),
    ];
    let specs = collect_specs(rows.clone());
    assert_eq!(specs.get("재료종류"), Some("유기농"));
    assert_eq!(normalize_rows(rows), "재료종류:유기농");
}

#[test]
fn test_checkbox_grid_collapses_into_categories() {
    // Checkbox tables list every option with a glyph next to the ones that apply.
    let rows = vec![
        RawRow::pair("보관방식", "실온보관"),
        RawRow::pair("냉장", "○"),
        RawRow::pair("냉동", "●"),
        RawRow::pair("7개월~", "○"),
        RawRow::pair("9개월~", "O"),
        RawRow::pair("전자레인지", "○"),
        RawRow::new(["형태"], ["죽", "미음"]),
    ];
    assert_eq!(
        normalize_rows(rows),
        "보관방식:실온보관,냉장,냉동/최소연령:7개월~,9개월~/형태:죽,미음"
    );
}

#[test]
fn test_realistic_detail_page() {
    let rows = vec![
        RawRow::new(["제조회사", "브랜드"], ["맘마밀 제조사 웹사이트", "맘마밀"]),
        RawRow::new(["재료 종류", "원산지"], ["쌀, 소고기 (호주산)", "국내산 (충북"]),
        RawRow::new(["형태"], ["죽", "○", "진밥"]),
        RawRow::pair("[용량]", "100g\n x 2개"),
        RawRow::pair("보존료", "무첨가"),
        RawRow::pair("합성착색료", "캐러멜색소"),
        RawRow::pair("유기농인증", "●"),
        RawRow::pair("HACCP인증", "○"),
        RawRow::pair("인증번호", "2023-0012 인증번호 확인"),
        RawRow::pair("상세설명", "상세설명 / 판매 사이트 문의"),
        RawRow::pair("등록년월", "2023.05"),
        RawRow::pair("파우치", "○"),
    ];

    let record = ProductRecord::from_rows("맘마밀 소고기 진밥", "https://prod.danawa.com/info/?pcode=1", rows);

    assert_eq!(
        record.spec,
        "제조회사:맘마밀/브랜드:맘마밀/재료:쌀, 소고기/원산지:국내산/형태:죽,진밥/\
         용량:100g x 2개/보존료:무첨가/無첨가:캐러멜색소/포장용기:파우치/\
         인증:유기농인증/인증정보:HACCP인증,2023-0012/등록년월일:2023.05"
    );
}

#[test]
fn test_unreadable_page_yields_empty_spec() {
    assert_eq!(normalize_rows(Vec::new()), "");
    assert_eq!(
        normalize_rows(vec![RawRow::default(), RawRow::pair("", "")]),
        ""
    );
}
