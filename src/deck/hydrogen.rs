//! 수소 에너지 개관 deck, 18 slides.

use super::Deck;
use super::{centered, gap, heading, line, run, sub, table_block, widths_in};
use crate::common::{Rect, RgbColor};
use crate::compose::{
    Block, ClosingContent, ClosingMessage, CoverContent, CoverLine, ParaSpec, SlideSpec,
};
use crate::pptx::Geometry;
use crate::theme::{ColorToken, Theme};

const STAGE_GREEN: ColorToken = ColorToken::Custom(RgbColor::new(0x22, 0x8B, 0x5B));
const QUOTE_BG: ColorToken = ColorToken::Custom(RgbColor::new(0xE8, 0xF6, 0xEE));

/// Rounded bar carrying one centered label.
fn label_chip(rect: Rect, fill: ColorToken, text: &str, size: f64) -> Block {
    Block::Chip {
        rect,
        shape: Geometry::RoundedRectangle,
        fill,
        paras: vec![centered(text, size, true, ColorToken::Page)],
    }
}

/// Highlighted quote strip.
fn quote_chip(rect: Rect, text: &str, size: f64) -> Block {
    Block::Chip {
        rect,
        shape: Geometry::RoundedRectangle,
        fill: QUOTE_BG,
        paras: vec![centered(text, size, true, ColorToken::Primary)],
    }
}

/// Two-space indented list lines in the hanging style used by body slides.
fn indented(lines: &[&str], size: f64, color: ColorToken, space_after: f64) -> Vec<ParaSpec> {
    lines
        .iter()
        .map(|text| ParaSpec {
            space_after: Some(space_after),
            runs: vec![run(&format!("  {text}"), size, false, color)],
            ..Default::default()
        })
        .collect()
}

fn body(paras: Vec<ParaSpec>) -> Block {
    Block::Text {
        rect: Rect::from_inches(0.8, 1.6, 11.7, 5.2),
        paras,
    }
}

fn text_at(rect: Rect, paras: Vec<ParaSpec>) -> Block {
    Block::Text { rect, paras }
}

fn cover() -> SlideSpec {
    SlideSpec::cover(CoverContent {
        title: "수소 에너지의 현재와 미래".to_string(),
        subtitle: "The Present and Future of Hydrogen Energy".to_string(),
        footer_lines: vec![
            CoverLine::new(
                "수소 에너지 도서 3권 분석 기반 종합 발표",
                22.0,
                ColorToken::Custom(RgbColor::new(0xBB, 0xBB, 0xBB)),
            ),
            CoverLine::new(
                "2026.02",
                18.0,
                ColorToken::Custom(RgbColor::new(0x99, 0x99, 0x99)),
            ),
        ],
    })
}

fn toc() -> SlideSpec {
    let items = [
        ("01", "왜 수소인가?"),
        ("02", "수소의 종류 (색깔별 분류)"),
        ("03", "수소 가치사슬"),
        ("04", "생산 기술 (수전해 비교)"),
        ("05", "저장 · 운송 기술"),
        ("06", "활용 분야 · 섹터 커플링"),
        ("07", "수소 vs 배터리"),
        ("08", "글로벌 수소 시장 전망"),
        ("09", "미국 수소 전략"),
        ("10", "유럽 수소 전략"),
        ("11", "중국 · 중동 수소 전략"),
        ("12", "한국 수소 정책"),
        ("13", "한국 기업 투자 현황"),
        ("14", "수소 경제 핵심 수치"),
        ("15", "도전과 과제"),
        ("16", "결론 및 시사점"),
    ];
    let mut spec = SlideSpec::content("목차  |  Table of Contents");
    for (index, (num, title)) in items.iter().enumerate() {
        let column = index / 8;
        let row = index % 8;
        let left = if column == 0 { 0.8 } else { 6.8 };
        let top = 1.6 + row as f64 * 0.62;
        spec = spec.block(text_at(
            Rect::from_inches(left, top, 5.5, 0.55),
            vec![ParaSpec {
                runs: vec![
                    run(&format!("  {num}   "), 20.0, true, ColorToken::Accent),
                    run(title, 19.0, false, ColorToken::Text),
                ],
                ..Default::default()
            }],
        ));
    }
    spec
}

fn why_hydrogen() -> SlideSpec {
    SlideSpec::content("왜 수소인가?")
        .block(body(vec![
            heading("수소(H2)는 우주에서 가장 풍부한 원소이자 궁극의 청정 에너지원", 22.0),
            sub("연소 시 물(H2O)만 생성 — CO2 배출 제로", 18.0),
            sub("에너지 저장 매체이자 탄소 없는 연료 (이중 역할)", 18.0),
            gap(),
            heading("재생에너지만으로는 탄소중립 불가능", 22.0),
            sub(
                "태양광/풍력은 전력만 담당 — 총 에너지의 50%는 전기화 불가 (중공업, 장거리 수송, 계절저장)",
                18.0,
            ),
            sub("배터리 한계: EV 배터리 ~450kg, 대형 트럭용은 ~4,500kg → 적재 불가", 18.0),
            sub("계절 저장(여름 잉여 → 겨울 수요): 배터리로는 물리적으로 불가능", 18.0),
            gap(),
            heading("수소 + 전기 = '파워 커플'", 22.0),
            sub("전기: 가정, 경차량  |  수소: 중공업, 장거리 수송, 계절 저장, 화학 공정", 18.0),
            sub("섹터 커플링: 전기·수송·산업·난방을 하나로 연결하는 '만능 에너지 캐리어'", 18.0),
        ]))
        .block(quote_chip(
            Rect::from_inches(1.5, 6.0, 10.3, 0.8),
            "\"청정에너지는 더러운 에너지만큼 저렴해질 때까지 대세가 되지 않는다.\" — Marco Alvera",
            16.0,
        ))
}

fn hydrogen_types() -> SlideSpec {
    SlideSpec::content("수소의 종류  |  색깔별 분류")
        .block(table_block(
            Rect::from_inches(0.6, 1.6, 12.1, 3.5),
            &["구분", "생산 방식", "CO2 배출", "현황/전망"],
            &[
                &["그레이 (Grey)", "천연가스 수증기개질(SMR)", "~10kg CO2/kg H2", "현재 생산의 75%"],
                &["블루 (Blue)", "SMR + 탄소 포집·저장(CCS)", "대폭 감소", "현실적 전환 다리"],
                &["그린 (Green)", "재생에너지 수전해", "제로", "궁극적 목표, 비용 급감 중"],
                &["핑크 (Pink)", "원자력 수전해", "제로 (핵폐기물)", "원전 보유국 중심"],
                &["터콰이즈", "메탄 열분해", "고체 탄소 (CO2 無)", "연구 단계"],
            ],
            Some(widths_in(&[2.2, 3.8, 2.8, 3.3])),
            16.0,
            14.0,
        ))
        .block(text_at(
            Rect::from_inches(0.8, 5.4, 11.7, 1.5),
            vec![
                heading("전환 로드맵 (3권 공통 합의)", 20.0),
                sub(
                    "현재: 그레이 지배(75%)  →  2020~30s: 블루 (다리 역할)  →  2040~50: 그린 전면 확산",
                    17.0,
                ),
            ],
        ))
}

fn value_chain() -> SlideSpec {
    let stages: [(&str, &[&str]); 4] = [
        ("생산", &["수전해(AWE/PEM/SOEC)", "SMR + CCUS", "메탄 열분해"]),
        ("저장", &["고압 압축 (700bar)", "액화 (-253°C)", "암모니아/LOHC", "금속수소화물"]),
        ("운송", &["파이프라인", "해상 탱커", "튜브 트레일러"]),
        ("활용", &["수송 (FCEV)", "발전 (연료전지)", "산업 (철강/석유화학)", "건물 (난방/냉방)"]),
    ];
    let colors = [
        ColorToken::Primary,
        ColorToken::PrimarySoft,
        STAGE_GREEN,
        ColorToken::Accent,
    ];

    let mut spec = SlideSpec::content("수소 가치사슬  |  Value Chain");
    for (index, (title, items)) in stages.iter().enumerate() {
        let left = 0.5 + index as f64 * 3.15;
        spec = spec
            .block(Block::Chip {
                rect: Rect::from_inches(left, 1.8, 2.8, 4.0),
                shape: Geometry::RoundedRectangle,
                fill: colors[index],
                paras: Vec::new(),
            })
            .block(text_at(
                Rect::from_inches(left + 0.1, 1.9, 2.6, 0.7),
                vec![centered(title, 26.0, true, ColorToken::Page)],
            ))
            .block(text_at(
                Rect::from_inches(left + 0.2, 2.7, 2.4, 2.8),
                indented(items, 16.0, ColorToken::Page, 6.0),
            ));
        if index < 3 {
            spec = spec.block(text_at(
                Rect::from_inches(left + 2.85, 3.5, 0.3, 0.5),
                vec![centered("→", 28.0, true, ColorToken::Primary)],
            ));
        }
    }
    spec.block(text_at(
        Rect::from_inches(0.8, 6.0, 11.7, 0.8),
        vec![
            line(
                "2050 글로벌 수소 운송: 파이프라인 55% + 암모니아 해상운송 40%",
                16.0,
                false,
                ColorToken::Muted,
            ),
            line(
                "수소 저장·운송 시장: $21.7B (2030) → $566B (2050)",
                16.0,
                false,
                ColorToken::Muted,
            ),
        ],
    ))
}

fn production() -> SlideSpec {
    SlideSpec::content("수전해 생산 기술 비교")
        .block(table_block(
            Rect::from_inches(0.5, 1.6, 12.3, 4.2),
            &["구분", "AWE (알칼라인)", "PEM (고분자전해질)", "SOEC (고체산화물)"],
            &[
                &["성숙도", "가장 성숙 (상용)", "상용화", "실증/초기"],
                &["시장점유율", "60~75%", "22~25%", "~4% (성장 중)"],
                &[
                    "핵심 장점",
                    "최저 비용, 귀금속 불요\n대규모에 최적",
                    "빠른 응답, 유연 운전\n(0~160%), 컴팩트",
                    "최고 효율 (800°C+)\n부식 없음",
                ],
                &["핵심 단점", "느린 응답 속도", "귀금속 촉매 고가", "초기 단계, 고온 필요"],
                &[
                    "주요 성과",
                    "글로벌 주력 기술",
                    "2005년 이후 자본비 80% 하락",
                    "네덜란드 2.6MW\nNASA 4MW 설치",
                ],
            ],
            Some(widths_in(&[1.8, 3.5, 3.5, 3.5])),
            16.0,
            14.0,
        ))
        .block(text_at(
            Rect::from_inches(0.8, 6.1, 11.7, 0.8),
            vec![
                line(
                    "2024년 글로벌 수전해 설비용량: 2 GW  |  시스템 비용 목표: $250~500/kW",
                    16.0,
                    false,
                    ColorToken::Muted,
                ),
                line(
                    "KAIST: 백금 무함유 PEM 수전해 기술, 단원자 귀금속 AEM 촉매 개발",
                    16.0,
                    false,
                    ColorToken::Muted,
                ),
            ],
        ))
}

fn storage_transport() -> SlideSpec {
    SlideSpec::content("저장 · 운송 기술 비교")
        .block(table_block(
            Rect::from_inches(0.4, 1.6, 12.5, 4.5),
            &["방식", "원리", "장점", "단점"],
            &[
                &["고압 압축\n(350~700bar)", "고압 탱크 저장", "최저 비용, FCEV 적용", "폭발 위험, 중단거리"],
                &[
                    "액화 수소\n(-253°C)",
                    "극저온 액화",
                    "부피 1/800 축소\n71 kg/m³",
                    "액화 에너지 소비 큼",
                ],
                &[
                    "암모니아\n(NH3)",
                    "수소+질소 합성\n-33°C 액화",
                    "LH2 대비 1.7배 수소 밀도\n121 kg/m³, 기존 인프라",
                    "분해 에너지 필요",
                ],
                &[
                    "LOHC\n(MCH/톨루엔)",
                    "유기 액체 캐리어",
                    "상온 액체, 석유화학\n인프라 활용",
                    "고온 탈수소화 필요",
                ],
                &["금속수소화물", "금속에 수소 흡수", "가장 안전한 저장", "저장 용량 제한"],
            ],
            Some(widths_in(&[2.0, 2.8, 4.0, 3.7])),
            16.0,
            14.0,
        ))
        .block(text_at(
            Rect::from_inches(0.8, 6.3, 11.7, 0.6),
            vec![line(
                "Snam(이탈리아): 기존 천연가스 배관의 70%가 수소 호환  |  배관 1km = 수소 12톤 저장 = 4만 가구 1일 전력",
                16.0,
                false,
                ColorToken::Muted,
            )],
        ))
}

fn applications() -> SlideSpec {
    let sectors: [(&str, &[&str]); 4] = [
        (
            "수송",
            &[
                "FCEV 승용차 (현대 넥쏘 등)",
                "수소 트럭 (XCIENT 등 장거리)",
                "수소 선박 (암모니아 연료)",
                "항공 (e-kerosene 합성연료)",
            ],
        ),
        (
            "발전",
            &[
                "연료전지 발전 (15GW 목표)",
                "가스터빈 수소혼소/전소",
                "분산형 전원 (건물/공장)",
                "계절 저장 → 전력 변환",
            ],
        ),
        (
            "산업",
            &[
                "수소환원제철 (CO2 95% 감축)",
                "석유화학 원료",
                "시멘트 (초고온 공정)",
                "반도체 공정용 수소",
            ],
        ),
        (
            "건물",
            &[
                "수소 보일러 (난방)",
                "가정용 연료전지 (에네팜)",
                "수소 냉방 시스템",
                "천연가스 배관 수소 혼입",
            ],
        ),
    ];
    let colors = [
        ColorToken::Primary,
        ColorToken::PrimarySoft,
        STAGE_GREEN,
        ColorToken::Accent,
    ];

    let mut spec = SlideSpec::content("활용 분야  |  섹터 커플링");
    for (index, (sector, items)) in sectors.iter().enumerate() {
        let left = 0.4 + index as f64 * 3.15;
        spec = spec
            .block(label_chip(
                Rect::from_inches(left, 1.7, 2.9, 0.7),
                colors[index],
                sector,
                24.0,
            ))
            .block(text_at(
                Rect::from_inches(left + 0.15, 2.6, 2.7, 3.2),
                indented(items, 16.0, ColorToken::Text, 8.0),
            ));
    }
    spec.block(text_at(
        Rect::from_inches(0.8, 6.0, 11.7, 0.8),
        vec![
            line(
                "핵심 개념: 섹터 커플링 — 수소가 전기·수송·산업·난방을 하나로 연결하는 '만능 에너지 캐리어'",
                17.0,
                true,
                ColorToken::Primary,
            ),
            line(
                "장거리 트럭(2040): 최대 단일 수소 수요 분야 (~80 Mtpa)  |  항공(2050): ~50 Mtpa (e-fuel 기반)",
                16.0,
                false,
                ColorToken::Muted,
            ),
        ],
    ))
}

fn h2_vs_battery() -> SlideSpec {
    SlideSpec::content("수소 vs 배터리  |  영역별 적합성")
        .block(table_block(
            Rect::from_inches(0.4, 1.6, 12.5, 4.8),
            &["분야", "수소 유리", "배터리/전기 유리", "비고"],
            &[
                &["승용차", "", "배터리 우세", "BEV 경제성 확립"],
                &["대형 트럭", "수소 우세", "", "H2: ~900kg vs 배터리: ~4,500kg"],
                &["선박", "수소(암모니아) 우세", "", "글로벌 배출 ~3%, 암모니아 연료"],
                &["항공", "수소(e-kerosene)", "", "Airbus ZEROe 프로그램"],
                &["철강", "수소환원제철 (H2-DRI)", "", "CO2 95% 감축, 차 가격 <1% 상승"],
                &["계절 저장", "유일한 해법", "", "여름 잉여 → 겨울 수요"],
                &["장거리 에너지 수송", "파이프라인 우세", "", "송전선보다 훨씬 저렴"],
                &["가정/단거리", "", "전기 우세", "그리드 전력이 효율적"],
            ],
            Some(widths_in(&[2.2, 3.0, 3.0, 4.3])),
            16.0,
            14.0,
        ))
        .block(text_at(
            Rect::from_inches(0.8, 6.6, 11.7, 0.4),
            vec![line(
                "수소와 전기는 경쟁이 아닌 보완 — 전기화 불가 영역에서 수소가 핵심 역할",
                18.0,
                true,
                ColorToken::Primary,
            )],
        ))
}

fn global_market() -> SlideSpec {
    SlideSpec::content("글로벌 수소 시장  |  규모와 전망")
        .block(table_block(
            Rect::from_inches(0.6, 1.6, 5.5, 4.8),
            &["지표", "수치"],
            &[
                &["2024 글로벌 수소 수요", "~1억 톤 (99% 그레이)"],
                &["2024 그린수소 시장", "$79.8억"],
                &["2025 글로벌 수소경제", "$1,863억 (CAGR 4.49%)"],
                &["2030 그린수소 시장", "$605.6억 (CAGR 38.5%)"],
                &["2050 글로벌 수소경제", "$2.5~12조"],
                &["2050 인프라 투자 기회", "$15~20조"],
                &["2050 수소 수요 전망", "3.75~6.6억 톤 (현재 대비 5~6배)"],
                &["2050 청정수소 에너지 비중", "25% (BNEF)"],
            ],
            Some(widths_in(&[2.8, 2.7])),
            16.0,
            14.0,
        ))
        .block(text_at(
            Rect::from_inches(6.8, 1.6, 5.5, 0.5),
            vec![line(
                "그린수소 비용 하락 추이 ($/kg)",
                20.0,
                true,
                ColorToken::Primary,
            )],
        ))
        .block(table_block(
            Rect::from_inches(6.8, 2.2, 5.5, 3.2),
            &["시기", "비용", "vs 화석연료"],
            &[
                &["~2010", "$24/kg", "15배"],
                &["~2020", "$4~5/kg", "~2배"],
                &["2024", "$3~8/kg", "1.5~6배"],
                &["2030 목표", "$1.5~3/kg", "경쟁력 확보"],
                &["2050 목표", "$0.7~1.5/kg", "화석연료보다 저렴"],
            ],
            Some(widths_in(&[1.5, 1.8, 2.2])),
            16.0,
            14.0,
        ))
        .block(text_at(
            Rect::from_inches(0.8, 5.7, 11.7, 1.2),
            vec![
                heading("주요 비용 목표", 18.0),
                sub(
                    "US DOE: $1/kg (2031)  |  EU: $1.5~3/kg (2030)  |  한국: 3,500원/kg (2030) → 2,500원/kg (2050)",
                    16.0,
                ),
                sub(
                    "Green Hydrogen Catapult (7개 글로벌 기업): $2/kg (2026), 25GW 수전해기, 500만톤/년, $1,100억 투자",
                    16.0,
                ),
            ],
        ))
}

fn us_strategy() -> SlideSpec {
    SlideSpec::content("미국 수소 전략  |  IRA와 수소허브")
        .block(body(vec![
            heading("IRA (인플레이션 감축법) — Section 45V", 22.0),
            sub("청정수소 생산세액공제: CO2 배출량 기준 4단계, 최대 $3/kg", 18.0),
            sub("10년간 총 ~$130억 규모 지원", 18.0),
            sub("석유·가스 초강대국에서 수소 초강대국으로의 확장 전략", 18.0),
            gap(),
            heading("DOE Hydrogen Shot", 22.0),
            sub("목표: $1/kg by 2031 (1-1-1 비전)", 18.0),
            gap(),
            heading("수소허브 프로그램 (H2Hubs)", 22.0),
            sub("지역별 생산-저장-활용 통합 생태계 구축", 18.0),
            sub("생산지-소비지-인프라를 클러스터로 연결", 18.0),
        ]))
        .block(table_block(
            Rect::from_inches(7.5, 1.8, 4.8, 2.5),
            &["CO2 배출 (kg CO2/kg H2)", "세액공제 ($/kg)"],
            &[
                &["< 0.45", "$3.00"],
                &["0.45 ~ 1.5", "$1.00"],
                &["1.5 ~ 2.5", "$0.75"],
                &["2.5 ~ 4.0", "$0.60"],
            ],
            Some(widths_in(&[2.8, 2.0])),
            15.0,
            14.0,
        ))
}

fn eu_strategy() -> SlideSpec {
    SlideSpec::content("유럽 수소 전략  |  REPowerEU").block(body(vec![
        heading("REPowerEU 목표 (2030)", 22.0),
        sub("그린수소 1,000만 톤 자체 생산 + 1,000만 톤 수입", 18.0),
        sub("수소 프로젝트 총 투자: $1,340억", 18.0),
        sub("러시아 가스 의존 탈피 + 산업 경쟁력 확보 (이중 동기)", 18.0),
        gap(),
        heading("European Hydrogen Backbone (유럽 수소 배관망)", 22.0),
        sub("2030: 31,500km  →  2040: 57,600km", 18.0),
        sub("IPCEI Hy2Infra: 최대 69억 유로 공적 자금", 18.0),
        sub("독일 단독: 200억 유로 핵심 수소 네트워크 투자", 18.0),
        gap(),
        heading("SoutH2 Corridor", 22.0),
        sub("북아프리카 → 이탈리아 → 오스트리아 → 독일, 3,300km 파이프라인", 18.0),
        sub("유럽 에너지 안보의 핵심 인프라로 부상", 18.0),
    ]))
}

fn china_mideast() -> SlideSpec {
    SlideSpec::content("중국 · 중동 수소 전략")
        .block(text_at(
            Rect::from_inches(0.8, 1.6, 5.5, 5.0),
            vec![
                heading("중국 — 세계 최대 수소 생산국", 21.0),
                sub("생산: 3,500만 톤 (2023), 용량 4,900만 톤", 17.0),
                sub("수소 산업 규모 1조 위안 돌파", 17.0),
                sub("수전해기: 글로벌 설치용량 65%\n    확정 주문 75% 점유", 17.0),
                sub(
                    "신장 쿠차 프로젝트: 세계 최초\n    대규모 상업 그린수소 (1,000m³/hr)",
                    17.0,
                ),
                sub("그린수소 프로젝트: 600+건 진행 중", 17.0),
                sub("FCEV 목표: 2025년 5만 대", 17.0),
            ],
        ))
        .block(text_at(
            Rect::from_inches(6.8, 1.6, 5.5, 5.0),
            vec![
                heading("중동 — 석유 수출국의 대전환", 21.0),
                gap(),
                line("사우디아라비아", 18.0, true, ColorToken::PrimarySoft),
                sub("세계 최대 석유 수출국 → 수소 수출국 전환", 17.0),
                sub("NEOM Helios: $50억, 세계 최대 그린수소", 17.0),
                gap(),
                line("UAE", 18.0, true, ColorToken::PrimarySoft),
                sub("블루수소 + 암모니아 수출 확대", 17.0),
                sub("아부다비: 연 20만톤 암모니아 → 한국 수출", 17.0),
                gap(),
                line("오만", 18.0, true, ColorToken::PrimarySoft),
                sub("그린수소 허브 추진", 17.0),
                sub("POSCO 컨소시엄: 47년 독점 개발권 확보", 17.0),
            ],
        ))
}

fn korea_policy() -> SlideSpec {
    SlideSpec::content("한국 수소 정책  |  로드맵과 목표").block(table_block(
        Rect::from_inches(0.5, 1.5, 12.3, 5.5),
        &["정책/지표", "내용"],
        &[
            &["2005년", "최초 '수소경제 마스터플랜' 수립"],
            &["2019 로드맵", "FCEV 620만대, 충전소 1,200개, 연료전지 15GW (2040)"],
            &["2021 기본계획", "2030: 390만톤 / 2050: 2,790만톤 청정수소"],
            &["세계 최초 수소법", "수소경제 전용 법률 제정 (글로벌 최초)"],
            &["청정수소 입찰제(CHPS)", "세계 최초 시행 (2024), 입찰가 477원/kWh"],
            &["2050 수소 비중", "최종에너지 수요의 21%"],
            &["수입 의존도", "81% (~2,200만톤) 수입 필요 (2050)"],
            &["국내 생산", "블루 200만톤 + 그린 300만톤 = 500만톤 (2050)"],
            &["경제적 효과", "연 43조원 부가가치, 42만개 일자리 (2040)"],
            &["충전소 현황", "385개 (2024) → 450개 (2025) → 660개 (2030)"],
            &["수소 배관", "410km 건설 중"],
        ],
        Some(widths_in(&[3.5, 8.8])),
        16.0,
        14.0,
    ))
}

fn korea_companies() -> SlideSpec {
    SlideSpec::content("한국 기업 수소 투자 현황")
        .block(table_block(
            Rect::from_inches(0.4, 1.5, 12.5, 4.8),
            &["기업/그룹", "2030 투자규모", "주요 수소 사업"],
            &[
                &[
                    "SK그룹\n(SK E&S)",
                    "~$120억\n(~12조원)",
                    "보령 블루수소 25만톤/년(2026)\n인천 세계최대 수소액화플랜트 3만톤/년",
                ],
                &[
                    "현대차그룹",
                    "~$72억",
                    "FCEV 리더 (넥쏘, XCIENT 수소트럭)\n수소 상용 모빌리티 밸류체인 통합",
                ],
                &[
                    "포스코",
                    "~$65억",
                    "수소환원제철(HyREX)\n오만 그린수소 22만톤/년 (47년 독점)",
                ],
                &["롯데케미칼", "6조원", "2030년까지 청정수소 120만톤 생산·공급"],
                &[
                    "두산퓨얼셀",
                    "—",
                    "정치용 연료전지 국내 M/S 1위\n미국 수출 확대, SOFC 라인업",
                ],
                &["한화", "—", "해양 수소 연료전지 (200kW, DNV인증)\n수소 저장 사업"],
            ],
            Some(widths_in(&[2.0, 2.2, 8.3])),
            16.0,
            14.0,
        ))
        .block(text_at(
            Rect::from_inches(0.8, 6.5, 11.7, 0.5),
            vec![line(
                "5대 그룹 합계: 2030년까지 $380억 (약 43조원) 투자 계획",
                18.0,
                true,
                ColorToken::Primary,
            )],
        ))
}

fn key_numbers() -> SlideSpec {
    SlideSpec::content("수소 경제 핵심 수치  |  Summary Stats").block(table_block(
        Rect::from_inches(0.5, 1.5, 12.3, 5.5),
        &["분류", "지표", "수치"],
        &[
            &["시장", "2024 글로벌 수소 수요", "~1억 톤"],
            &["시장", "2050 수소 수요 전망", "3.75~6.6억 톤 (5~6배)"],
            &["시장", "2050 수소경제 규모", "$2.5~12조"],
            &["비용", "그린수소 비용 (2024)", "$3~8/kg"],
            &["비용", "그린수소 목표 (2050)", "$0.7~1.5/kg"],
            &["투자", "EU 수소 프로젝트", "$1,340억"],
            &["투자", "한국 5대 그룹", "$380억 (2030)"],
            &["인프라", "EU 수소 배관 (2040)", "57,600km"],
            &["인프라", "한국 충전소 (2024)", "385개"],
            &["한국", "FCEV 등록 (누적)", "19,270대 (글로벌 1위)"],
            &["한국", "정치용 연료전지", "1GW+ (세계 1/3 이상)"],
            &["한국", "2050 수소 에너지 비중", "최종 에너지의 21%"],
        ],
        Some(widths_in(&[1.5, 4.5, 6.3])),
        16.0,
        14.0,
    ))
}

fn challenges() -> SlideSpec {
    let panels: [(&str, ColorToken, &[&str]); 4] = [
        (
            "비용",
            ColorToken::Primary,
            &[
                "그린수소: 화석 대비 1.5~6배 비쌈",
                "에너지 변환 손실 60~70%",
                "청정수소 입찰가 477원/kWh\n    — 수익성 미확보",
            ],
        ),
        (
            "인프라",
            ColorToken::PrimarySoft,
            &[
                "2050까지 $15조 투자 필요",
                "한국 충전소 385개 (2024)",
                "수소 액화플랜트\n    — 전량 외국 기술 의존",
            ],
        ),
        (
            "실행 리스크",
            STAGE_GREEN,
            &[
                "글로벌 프로젝트: 49→37 Mtpa 하향",
                "바인딩 계약 < 2 Mt/year",
                "전문가: 2030 목표의 10%만 달성 가능",
                "Stellantis, 수소차 프로그램 취소 (2025.7)",
            ],
        ),
        (
            "정책·안전",
            ColorToken::Accent,
            &[
                "한국: 포지티브 규제 → 유연성 부족",
                "정권 교체 시 정책 일관성 리스크",
                "중국 수전해기 65~75% 지배\n    — 공급망 리스크",
                "수소 저장·충전 사고 60%+ 집중",
            ],
        ),
    ];
    let positions = [(0.4, 1.6), (6.6, 1.6), (0.4, 4.2), (6.6, 4.2)];

    let mut spec = SlideSpec::content("도전과 과제");
    for ((title, color, items), (left, top)) in panels.iter().zip(positions) {
        spec = spec
            .block(label_chip(
                Rect::from_inches(left, top, 6.0, 0.55),
                *color,
                title,
                20.0,
            ))
            .block(text_at(
                Rect::from_inches(left + 0.2, top + 0.65, 5.6, 1.8),
                indented(items, 15.0, ColorToken::Text, 4.0),
            ));
    }
    spec.block(quote_chip(
        Rect::from_inches(1.5, 6.8, 10.3, 0.5),
        "\"저탄소 수소는 실패하는 것이 아니라, 닷컴 시대 초기를 겪고 있는 것이다.\" — ERM Report (2024)",
        15.0,
    ))
}

fn conclusion() -> SlideSpec {
    SlideSpec::closing(ClosingContent {
        title: "결론 및 시사점".to_string(),
        messages: vec![
            ClosingMessage::new(
                "1",
                "수소는 탄소중립의 필수 퍼즐 조각",
                &[
                    "전기화만으로는 순배출 제로 불가",
                    "중공업·장거리 수송·계절 저장에 수소는 유일한 대안",
                    "2050 수소 수요: 현재의 5~6배 (3.75~6.6억 톤)",
                ],
            ),
            ClosingMessage::new(
                "2",
                "그레이 → 블루 → 그린, 단계적 전환이 현실 경로",
                &[
                    "그린수소 비용: $24/kg(2010) → $3~8(현재) → $1 이하(2050)",
                    "블루수소가 2030년대까지 '다리' 역할 수행",
                    "세계적 투자 물결: 수조 달러 규모 진행 중",
                ],
            ),
            ClosingMessage::new(
                "3",
                "한국: 기술 리더십 + 해외 공급망 + 제도적 시장 = 경쟁력",
                &[
                    "FCEV·연료전지 세계 선도, 세계 최초 수소법·입찰제",
                    "약점: 재생에너지 부족 → 81% 수입 의존 불가피",
                    "핵심: 액화 기술 국산화 + 해외 파트너십 다변화",
                ],
            ),
        ],
        thanks: "감사합니다  |  Thank You".to_string(),
    })
}

/// The full 18-slide deck.
pub fn deck() -> Deck {
    let mut deck = Deck::new("hydrogen", "수소에너지_발표자료.pptx", Theme::business());
    for spec in [
        cover(),
        toc(),
        why_hydrogen(),
        hydrogen_types(),
        value_chain(),
        production(),
        storage_transport(),
        applications(),
        h2_vs_battery(),
        global_market(),
        us_strategy(),
        eu_strategy(),
        china_mideast(),
        korea_policy(),
        korea_companies(),
        key_numbers(),
        challenges(),
        conclusion(),
    ] {
        deck.push(spec);
    }
    deck
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_has_cover_and_closing() {
        let deck = deck();
        let prs = deck.build().unwrap();
        assert_eq!(prs.slide_count(), 18);
        let cover = prs.slide(0).unwrap();
        assert_eq!(cover.background(), Some(Theme::business().primary));
        let closing = prs.slide(17).unwrap();
        assert_eq!(closing.background(), Some(Theme::business().primary));
    }

    #[test]
    fn test_toc_columns() {
        let spec = toc();
        // 16 entries, all text blocks
        assert_eq!(spec.blocks.len(), 16);
    }
}
