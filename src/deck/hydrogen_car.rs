//! 수소자동차 시장 분석 deck, 28 slides.

use super::Deck;
use super::{
    caption, chip_block, gap, heading, line, part_toc, run, sub, table_block, widths_in,
};
use crate::common::{Rect, RgbColor};
use crate::compose::{
    Block, ClosingContent, ClosingMessage, CoverContent, CoverLine, ParaSpec, SlideSpec,
};
use crate::theme::{ColorToken, Theme};

fn text_at(rect: Rect, paras: Vec<ParaSpec>) -> Block {
    Block::Text { rect, paras }
}

fn cover() -> SlideSpec {
    SlideSpec::cover(CoverContent {
        title: "수소자동차 시장 현황과 전망".to_string(),
        subtitle: "세계·한국·BEV 비교 종합분석".to_string(),
        footer_lines: vec![CoverLine::new(
            "2026. 02",
            18.0,
            ColorToken::Custom(RgbColor::new(0x88, 0xAA, 0xCC)),
        )],
    })
}

fn toc() -> SlideSpec {
    SlideSpec::content("목차 (Table of Contents)").blocks(part_toc(&[
        (
            "Part 1",
            "세계 수소차 시장 현황",
            "글로벌 판매 추이, 국가별 보급, 주요 모델, 충전 인프라",
        ),
        ("Part 2", "시장 전망 및 정책", "시장 전망, 정부 정책, 상용차·기타 모빌리티"),
        ("Part 3", "핵심 기술 발전", "스택·촉매 기술, 비용·저장 혁신"),
        (
            "Part 4",
            "한국 시장 심층분석",
            "시장 현황, 인프라, 정책, 기업 생태계, 글로벌 위상",
        ),
        (
            "Part 5",
            "BEV vs FCEV 비교 및 결론",
            "사양·TCO·환경성, 시나리오 분석, 전략 권고",
        ),
    ]))
}

fn global_market() -> SlideSpec {
    SlideSpec::content("세계 수소자동차 시장 현황")
        .block(table_block(
            Rect::from_inches(0.6, 1.5, 8.5, 4.0),
            &["연도", "글로벌 판매량", "전년 대비", "누적 등록", "주요 이슈"],
            &[
                &["2020년", "~9,000대", "-", "~3만 대", "코로나19, 한국 수소법"],
                &["2021년", "~16,000대", "+78%", "~4.6만 대", "미라이 2세대 출시"],
                &["2022년", "~20,000대", "+25%", "~6.6만 대", "한국/중국 주도 성장"],
                &["2023년", "~14,000대", "-30%", "~8만 대", "보조금 변화, 경기 둔화"],
                &["2024년", "~16,011대", "+14%", "~9.6만 대", "현대차 회복, 미라이↓"],
                &["2025년(추정)", "~20,000대", "+25%", "~11.6만 대", "넥쏘 2세대 효과"],
            ],
            Some(widths_in(&[1.2, 1.8, 1.5, 1.5, 2.5])),
            14.0,
            12.0,
        ))
        .block(chip_block(
            Rect::from_inches(9.5, 1.5, 3.5, 1.3),
            ColorToken::AccentRed,
            "BEV와의 규모 격차\n2024년 기준 약 850배\nFCEV ~0.02% vs BEV ~18%",
            13.0,
        ))
        .block(chip_block(
            Rect::from_inches(9.5, 3.0, 3.5, 1.3),
            ColorToken::Primary,
            "FCEV 시장 특성\n연 1~2만 대 정체\n극소 니치(niche) 영역",
            13.0,
        ))
        .block(chip_block(
            Rect::from_inches(9.5, 4.5, 3.5, 1.0),
            ColorToken::Accent,
            "BEV: 310만→1,380만 대\n5년간 4.5배 성장",
            13.0,
        ))
}

fn country_status() -> SlideSpec {
    SlideSpec::content("주요 국가별 FCEV 보급 현황 (2025년)")
        .block(table_block(
            Rect::from_inches(0.6, 1.5, 12.1, 3.5),
            &["국가", "누적 등록 대수", "세계 비중", "특징"],
            &[
                &["한국", "~40,000대", "~35%", "세계 유일 성장 시장, 넥쏘 단일 모델"],
                &["중국", "~30,000대", "~26%", "버스/트럭 상용차 중심, 부품 국산화율 70%+"],
                &["미국", "~12,283대", "~11%", "캘리포니아 편중, 충전소 51개, 정책 불확실"],
                &["일본", "~8,000대", "~7%", "미라이 중심, 판매 둔화(-39.1%)"],
                &["유럽", "~5,000대", "~4%", "상용차/버스 전환, BMW-도요타 협력"],
                &["기타", "~20,000대+", "~17%", "-"],
            ],
            Some(widths_in(&[2.0, 2.5, 1.6, 6.0])),
            14.0,
            12.0,
        ))
        .block(text_at(
            Rect::from_inches(0.8, 5.3, 11.7, 1.5),
            vec![
                line(
                    "한국: 넥쏘 글로벌 판매 6,861대(+78.9%), 시장점유율 42.9% 세계 1위",
                    14.0,
                    true,
                    ColorToken::Primary,
                ),
                line(
                    "중국: 에너지법에 수소 공식 분류, 연료전지 특허 글로벌 69% 장악, 비용 연 33% 하락",
                    14.0,
                    false,
                    ColorToken::Text,
                ),
                line(
                    "미국: 트럼프 행정부 IRA 45V 단축(10년→2년), H2Hub 22억$ 취소, FY2026 수소 예산 $0 제안",
                    14.0,
                    false,
                    ColorToken::AccentRed,
                ),
            ],
        ))
}

fn key_models() -> SlideSpec {
    SlideSpec::content("주요 모델: 현대 넥쏘 2세대 vs 도요타 미라이")
        .block(caption(
            Rect::from_inches(0.6, 1.35, 5.5, 0.3),
            "현대 넥쏘 2세대 (2025년 출시)",
            16.0,
            ColorToken::Primary,
        ))
        .block(table_block(
            Rect::from_inches(0.6, 1.7, 5.5, 3.5),
            &["항목", "사양"],
            &[
                &["연료전지 시스템", "2.5세대 (110kW, 실사용 94kW)"],
                &["모터 출력", "201~255마력"],
                &["주행거리", "약 720km (기록 ~1,400km)"],
                &["충전 시간", "약 5분"],
                &["V2L", "외부 전원 공급 지원"],
                &["가격(한국)", "~7,200만 원 (보조금 후 ~3,950만 원)"],
            ],
            Some(widths_in(&[2.2, 3.3])),
            14.0,
            12.0,
        ))
        .block(caption(
            Rect::from_inches(6.5, 1.35, 6.0, 0.3),
            "도요타 미라이 2세대",
            16.0,
            ColorToken::Primary,
        ))
        .block(table_block(
            Rect::from_inches(6.5, 1.7, 6.0, 3.0),
            &["항목", "사양"],
            &[
                &["연료전지 출력", "128kW"],
                &["주행거리", "850km+(WLTP), 기네스 1,360km"],
                &["구동 방식", "후륜구동(FR)"],
                &["가격", "$50,000~$67,000(미국)"],
                &["판매 추이", "2024년 -39.1% 감소"],
            ],
            Some(widths_in(&[2.2, 3.8])),
            14.0,
            12.0,
        ))
        .block(chip_block(
            Rect::from_inches(0.6, 5.5, 5.5, 1.0),
            ColorToken::Accent,
            "넥쏘: 글로벌 점유율 42.9% (세계 1위)\n양산 — 유럽형 2025.8 / 북미형 2025.11",
            14.0,
        ))
        .block(chip_block(
            Rect::from_inches(6.5, 5.5, 6.0, 1.0),
            ColorToken::AccentRed,
            "미라이: 점유율 7.3%로 하락\n도요타 3세대 스택(5.4 kW/L) 2026년 준비",
            14.0,
        ))
}

fn other_models() -> SlideSpec {
    SlideSpec::content("기타 주요 모델 및 개발 중단/철수 사례")
        .block(caption(
            Rect::from_inches(0.6, 1.35, 6.0, 0.3),
            "기타 주요 FCEV 모델",
            15.0,
            ColorToken::Primary,
        ))
        .block(table_block(
            Rect::from_inches(0.6, 1.7, 6.0, 2.0),
            &["모델", "제조사", "특징"],
            &[
                &["iX5 Hydrogen", "BMW", "도요타 FC, 295kW, 2028년 양산"],
                &["CR-V e:FCEV", "혼다", "GM 공동개발, EPA 435km"],
                &["XCIENT Fuel Cell", "현대", "대형트럭, 180kW 듀얼, 725km"],
            ],
            Some(widths_in(&[2.0, 1.3, 2.7])),
            14.0,
            12.0,
        ))
        .block(caption(
            Rect::from_inches(0.6, 3.9, 6.0, 0.3),
            "개발 중단/철수 사례",
            15.0,
            ColorToken::AccentRed,
        ))
        .block(table_block(
            Rect::from_inches(0.6, 4.2, 6.0, 2.0),
            &["제조사", "상태", "이유"],
            &[
                &["Stellantis", "2025년 중단", "인프라 부족, 비용"],
                &["Nikola", "Chapter 11 파산", "95대 리콜, 과대 약속"],
                &["Mercedes-Benz", "GLC F-CELL 단종", "승용 BEV 전략 집중"],
            ],
            Some(widths_in(&[1.8, 2.0, 2.2])),
            14.0,
            12.0,
        ))
        .block(chip_block(
            Rect::from_inches(7.0, 1.7, 5.8, 1.5),
            ColorToken::Primary,
            "제조사 전략 양극화\nBEV 올인: 테슬라, BYD, 폭스바겐\nBEV+FCEV 병행: 현대, 도요타, BMW, 혼다",
            14.0,
        ))
        .block(chip_block(
            Rect::from_inches(7.0, 3.5, 5.8, 1.5),
            ColorToken::AccentOrange,
            "Nikola 파산의 교훈\n수소 트럭 상용화의 어려움\n과대 약속의 위험성 시사",
            14.0,
        ))
        .block(chip_block(
            Rect::from_inches(7.0, 5.3, 5.8, 1.0),
            ColorToken::Accent,
            "BMW-도요타 협력\n2028년 양산형 수소차 출시 계획",
            14.0,
        ))
}

fn charging_infra() -> SlideSpec {
    SlideSpec::content("글로벌 수소 충전 인프라 현황")
        .block(table_block(
            Rect::from_inches(0.6, 1.5, 6.5, 3.8),
            &["국가/지역", "충전소 수", "특징"],
            &[
                &["중국", "~540개", "세계 최다, 상용차 중심"],
                &["한국", "~407기", "세계 2위, 2030년 660기 목표"],
                &["일본", "~160개", "2030년 1,000기 목표"],
                &["독일", "~100개+", "유럽 최대"],
                &["미국", "~51개", "캘리포니아 편중"],
                &["기타 유럽", "~120개+", "프랑스, 네덜란드 등"],
                &["전 세계 합계", "~1,200개", "EV 대비 1:2,000~3,000"],
            ],
            Some(widths_in(&[2.0, 1.5, 3.0])),
            14.0,
            12.0,
        ))
        .block(caption(
            Rect::from_inches(7.5, 1.35, 5.5, 0.3),
            "충전소 경제성 비교",
            15.0,
            ColorToken::Primary,
        ))
        .block(table_block(
            Rect::from_inches(7.5, 1.7, 5.3, 2.0),
            &["항목", "수소 충전소", "EV 급속 충전소"],
            &[
                &["설치 비용", "30~50억 원/기", "5,000만~1억 원/기"],
                &["비용 차이", "기준", "30~100배 저렴"],
                &["수익성", "대부분 만성 적자", "가동률 따라 흑자"],
            ],
            Some(widths_in(&[1.8, 1.8, 1.7])),
            14.0,
            12.0,
        ))
        .block(chip_block(
            Rect::from_inches(7.5, 4.0, 5.3, 1.2),
            ColorToken::AccentRed,
            "최대 장벽\n충전소 설치비 30~50억 원\nEV 대비 30~100배 비쌈",
            14.0,
        ))
        .block(chip_block(
            Rect::from_inches(7.5, 5.4, 5.3, 1.0),
            ColorToken::Primary,
            "전 세계 ~1,200개\nEV 충전소(수백만 기) 대비 극히 미미",
            14.0,
        ))
}

fn market_outlook() -> SlideSpec {
    SlideSpec::content("세계 수소차 시장 전망")
        .block(caption(
            Rect::from_inches(0.6, 1.35, 6.0, 0.3),
            "연료전지 전체 시장 규모 전망",
            15.0,
            ColorToken::Primary,
        ))
        .block(table_block(
            Rect::from_inches(0.6, 1.7, 6.0, 2.5),
            &["조사기관", "2030년 전망", "CAGR"],
            &[
                &["Grand View Research", "369.8억 달러", "27.1%"],
                &["MarketsandMarkets", "181.6억 달러", "26.3%"],
                &["Wissen Research", "210억 달러", "25.0%"],
                &["MarkNtel Advisors", "81.3억 달러", "20.4%"],
            ],
            Some(widths_in(&[2.5, 2.0, 1.5])),
            14.0,
            12.0,
        ))
        .block(caption(
            Rect::from_inches(0.6, 4.35, 6.0, 0.3),
            "FCEV 보급 전망 — 기관별 시나리오",
            15.0,
            ColorToken::Primary,
        ))
        .block(table_block(
            Rect::from_inches(0.6, 4.7, 6.0, 2.0),
            &["기관", "시나리오", "2030년 FCEV 비중"],
            &[
                &["IEA NZE", "넷제로", "전체 EV의 0.2~0.5%"],
                &["BloombergNEF", "기본", "신차의 0.22%"],
                &["McKinsey", "가속", "대형 상용차 15~25%"],
                &["IRENA", "1.5도", "2050년 장거리 30%"],
                &["Hydrogen Council", "가속", "500만 대+(2030)"],
            ],
            Some(widths_in(&[2.0, 1.5, 2.5])),
            14.0,
            11.0,
        ))
        .block(chip_block(
            Rect::from_inches(7.0, 1.7, 5.8, 1.5),
            ColorToken::Accent,
            "상용차 — 진정한 성장 동력\nCAGR 47.7% (2025~2032)\n대형 트럭/버스가 핵심 영역",
            14.0,
        ))
        .block(chip_block(
            Rect::from_inches(7.0, 3.5, 5.8, 1.5),
            ColorToken::Primary,
            "승용차 FCEV 점유율\n1% 미만에 머물 전망\n대형 상용차가 핵심 성장 영역",
            14.0,
        ))
        .block(chip_block(
            Rect::from_inches(7.0, 5.3, 5.8, 1.3),
            ColorToken::AccentOrange,
            "McKinsey 전망\n2040년 장거리 트럭\n수소 소비 ~80 Mtpa\n모빌리티 최대 수요처",
            13.0,
        ))
}

fn government_policy() -> SlideSpec {
    SlideSpec::content("주요국 정부 정책 및 보조금 비교")
        .block(table_block(
            Rect::from_inches(0.6, 1.5, 12.1, 3.0),
            &["국가", "핵심 정책", "FCEV 목표", "보조금 수준"],
            &[
                &["한국", "수소경제 로드맵, 수소법(세계 최초)", "2030년 18만 대", "~3,250만 원(세계 최고)"],
                &["일본", "수소기본전략(세계 최초, 2017)", "2030년 80만 대", "~200~300만 엔"],
                &["중국", "수소산업 중장기 계획", "2025년 5만 대", "시범도시 16억 위안/년"],
                &["미국", "IRA, H2Hubs", "정량 목표 부재", "45V: $3/kg 세액공제"],
                &["EU/독일", "REPowerEU, H2 Kernnetz", "-", "~7,000~9,000유로"],
            ],
            Some(widths_in(&[1.5, 3.5, 3.0, 4.1])),
            14.0,
            12.0,
        ))
        .block(text_at(
            Rect::from_inches(0.8, 4.8, 11.7, 2.0),
            vec![
                line("정책 리스크 요인", 16.0, true, ColorToken::AccentRed),
                sub(
                    "미국: IRA 45V 기간 10년→2년 단축, H2Hub 2개 22억$ 취소, FY2026 수소 예산 $0 제안",
                    13.0,
                ),
                sub("한국: 청정수소발전 입찰시장 낙찰률 11.5% 참패, CHPS 폐기론 대두", 13.0),
                sub(
                    "EU: REPowerEU FID 전환율 4%, 수전해 목표 40GW 대비 운영 중 385MW(1%)",
                    13.0,
                ),
                sub("중국: 지방정부 보조금 변동, 과잉 투자 우려", 13.0),
            ],
        ))
}

fn commercial_vehicles() -> SlideSpec {
    SlideSpec::content("수소 상용차 시장 동향 — 트럭 & 버스")
        .block(caption(
            Rect::from_inches(0.6, 1.35, 6.5, 0.3),
            "현대 XCIENT Fuel Cell (대형 트럭)",
            15.0,
            ColorToken::Primary,
        ))
        .block(table_block(
            Rect::from_inches(0.6, 1.7, 5.5, 3.0),
            &["항목", "사양"],
            &[
                &["연료전지", "쌍 90kW 스택, 총 180kW"],
                &["주행거리", "1회 충전 725km"],
                &["수소 탱크", "10개, 총 68kg"],
                &["유럽 배치", "165대, 누적 2,000만km"],
                &["북미 배치", "63대, ~160만km"],
                &["수상", "TIME '2025 최고의 발명'"],
            ],
            Some(widths_in(&[2.0, 3.5])),
            14.0,
            12.0,
        ))
        .block(chip_block(
            Rect::from_inches(6.5, 1.5, 6.3, 1.0),
            ColorToken::Accent,
            "수소 버스 — 한국: 누적 2,066대(+277%), 2030년 21,200대 목표",
            14.0,
        ))
        .block(chip_block(
            Rect::from_inches(6.5, 2.7, 6.3, 0.8),
            ColorToken::PrimarySoft,
            "중국: 세계 최대(수천 대) | 유럽: 2025 상반기 279대(+426%)",
            14.0,
        ))
        .block(chip_block(
            Rect::from_inches(6.5, 3.8, 6.3, 1.2),
            ColorToken::Primary,
            "상용차 시장 전망\nCAGR 47.7% (2025~2032)\nDeloitte: 2035년 대형 트럭 FCEV 15~25%",
            14.0,
        ))
        .block(chip_block(
            Rect::from_inches(6.5, 5.3, 6.3, 1.0),
            ColorToken::AccentRed,
            "교훈: Nikola 파산(2025.2, Chapter 11)\n수소 트럭 95대 리콜, 과대 약속의 위험",
            13.0,
        ))
}

fn other_mobility() -> SlideSpec {
    let items = [
        ("선박", "Viking Libra 수소 크루즈선\n6MW PEM(2026년)\n한화에어로 200kW 선박용 FC", ColorToken::Primary),
        ("항공", "ZeroAvia ZA600(600kW)\n2027년 인증 목표\nAirbus ZEROe(2035년)", ColorToken::PrimarySoft),
        ("열차", "Alstom Coradia iLint\n세계 최초 수소열차\n2022년 독일 상업 운행", ColorToken::AccentBlue),
        ("지게차", "Amazon 15,000대+\nWalmart 9,500대+\n빠른 충전, 냉동창고 적합", ColorToken::Accent),
        ("잠수함", "범한퓨얼셀 AIP용 PEMFC\n장보고-III급\n100% 국산화", ColorToken::AccentOrange),
        ("트랙터/드론", "현대차 수소전기 트랙터\n수소 드론 스타트업\n배터리 대비 3~5배 체공", ColorToken::AccentRed),
    ];
    let mut spec = SlideSpec::content("기타 수소 모빌리티 — 선박·항공·열차·지게차·잠수함");
    for (index, (title, desc, color)) in items.iter().enumerate() {
        let col = index % 3;
        let row = index / 3;
        spec = spec.block(chip_block(
            Rect::from_inches(0.6 + col as f64 * 4.2, 1.5 + row as f64 * 2.8, 3.9, 2.5),
            *color,
            &format!("■ {title}\n\n{desc}"),
            13.0,
        ));
    }
    spec
}

fn stack_technology() -> SlideSpec {
    SlideSpec::content("핵심 기술: 스택 출력밀도 & 촉매 혁신")
        .block(caption(
            Rect::from_inches(0.6, 1.35, 6.5, 0.3),
            "스택 출력밀도 세대별 향상",
            15.0,
            ColorToken::Primary,
        ))
        .block(table_block(
            Rect::from_inches(0.6, 1.7, 6.5, 2.5),
            &["제조사", "세대", "출력밀도", "시기"],
            &[
                &["현대차", "2.5세대(넥쏘 2)", "~3.5 kW/L", "2025년"],
                &["현대차", "3세대", "5.0+ kW/L", "2027년"],
                &["도요타", "2세대", "4.4 kW/L", "2020년"],
                &["도요타", "3세대", "5.4 kW/L", "2026년"],
                &["중국 SynStack", "GIII", "4.5+ kW/L", "2024년"],
            ],
            Some(widths_in(&[1.8, 2.0, 1.5, 1.2])),
            14.0,
            12.0,
        ))
        .block(caption(
            Rect::from_inches(0.6, 4.4, 6.5, 0.3),
            "현대차 3세대 스택 목표 (2027년)",
            15.0,
            ColorToken::Primary,
        ))
        .block(table_block(
            Rect::from_inches(0.6, 4.7, 6.5, 2.0),
            &["구분", "2세대(넥쏘1)", "2.5세대(넥쏘2)", "3세대(개발중)"],
            &[
                &["시기", "2018년", "2025년", "2027년"],
                &["스택 출력", "95kW", "110kW", "100/200kW"],
                &["내구성", "~16만km", "-", "50만km+"],
                &["가격", "기준", "-", "50%+ 인하"],
            ],
            Some(widths_in(&[1.5, 1.7, 1.7, 1.6])),
            14.0,
            12.0,
        ))
        .block(text_at(
            Rect::from_inches(7.5, 1.5, 5.3, 5.0),
            vec![
                heading("촉매 기술 혁신", 16.0),
                sub("백금 사용량: 1990년대 대비 kW당 90% 감소", 13.0),
                sub("DOE 2025 목표: 0.10 g/kW 미만", 13.0),
                sub("PGM-free 촉매(Fe-N-C): 0.85 W/cm² 달성", 13.0),
                sub("KAIST: 백금-아연 나노입자로 1/3 절감(2025)", 13.0),
            ],
        ))
}

fn cost_storage() -> SlideSpec {
    SlideSpec::content("연료전지 비용 추이 & 수소 저장 기술")
        .block(caption(
            Rect::from_inches(0.6, 1.35, 5.5, 0.3),
            "연료전지 시스템 비용 추이",
            15.0,
            ColorToken::Primary,
        ))
        .block(table_block(
            Rect::from_inches(0.6, 1.7, 5.0, 1.8),
            &["시점", "비용"],
            &[
                &["현재", "$80~100/kW"],
                &["2030년 DOE 목표", "$80/kW"],
                &["장기 목표", "$35/kW"],
            ],
            Some(widths_in(&[2.5, 2.5])),
            14.0,
            13.0,
        ))
        .block(text_at(
            Rect::from_inches(0.6, 3.8, 5.5, 2.5),
            vec![
                heading("수소 저장 기술 현황", 16.0),
                sub("현재 표준: 700bar 고압 기체(Type IV 탱크)", 14.0),
                sub("효성첨단소재 TANSOM: 2028년까지 1조 원 투자", 14.0),
                sub("일진하이솔루스/코오롱스페이스웍스: Type IV 수소 탱크", 14.0),
            ],
        ))
        .block(chip_block(
            Rect::from_inches(6.5, 1.5, 6.3, 1.5),
            ColorToken::Accent,
            "비용 혁신 로드맵\n$80~100/kW → $35/kW\n가격이 내연기관 수준에 도달하면\nFCEV 시장 급성장 가능",
            14.0,
        ))
        .block(chip_block(
            Rect::from_inches(6.5, 3.3, 6.3, 1.3),
            ColorToken::Primary,
            "중국 비용 혁신\n비용 연간 33% 하락\n부품 국산화율 70%+\n급격한 가격 경쟁력 확보",
            14.0,
        ))
        .block(chip_block(
            Rect::from_inches(6.5, 4.9, 6.3, 1.3),
            ColorToken::AccentOrange,
            "탄소섬유 국산화\n효성 TANSOM — 고압 수소탱크 핵심 소재\n2028년까지 1조 원 투자 계획",
            14.0,
        ))
}

fn korea_market() -> SlideSpec {
    SlideSpec::content("한국 수소자동차 시장 현황")
        .block(table_block(
            Rect::from_inches(0.6, 1.5, 8.0, 3.8),
            &["연도", "신규 판매", "전년 대비", "누적 등록", "비고"],
            &[
                &["2019년", "~4,200대", "-", "~5,000대", "넥쏘 본격 판매 시작"],
                &["2020년", "~5,800대", "+38%", "~10,000대", "코로나에도 성장"],
                &["2021년", "~8,500대", "+47%", "~19,000대", "최대 판매 기록"],
                &["2022년", "~10,800대", "+27%", "~29,000대", "보조금 축소에도 성장"],
                &["2023년", "~3,800대", "-65%", "~33,000대", "넥쏘 1세대 노후화"],
                &["2024년", "~3,700대", "-3%", "~38,000대", "2세대 출시 대기"],
                &["2025년", "~6,861대", "+78.9%", "~40,000대", "넥쏘 2세대 효과"],
            ],
            Some(widths_in(&[1.2, 1.5, 1.3, 1.5, 2.5])),
            14.0,
            11.0,
        ))
        .block(chip_block(
            Rect::from_inches(9.0, 1.5, 3.8, 1.3),
            ColorToken::AccentRed,
            "로드맵 목표 달성률\n2022년 목표 8.1만 대 대비\n실적 ~2.9만 대\n달성률 약 23%",
            14.0,
        ))
        .block(chip_block(
            Rect::from_inches(9.0, 3.0, 3.8, 1.3),
            ColorToken::Accent,
            "넥쏘 글로벌 판매\n6,861대(+78.9%)\n한국 6,802대 / 해외 ~59대\n해외 비중 극히 제한적",
            14.0,
        ))
        .block(chip_block(
            Rect::from_inches(9.0, 4.5, 3.8, 1.3),
            ColorToken::Primary,
            "해외 판매 부진 이유\n충전 인프라 절대 부족\nBEV 대비 가격 경쟁력 열위\n캘리포니아 외 보급 전무",
            13.0,
        ))
}

fn korea_infra_crisis() -> SlideSpec {
    SlideSpec::content("한국 수소 충전 인프라 — 현황 및 수익성 위기")
        .block(caption(
            Rect::from_inches(0.6, 1.35, 5.5, 0.3),
            "충전소 현황 및 목표",
            15.0,
            ColorToken::Primary,
        ))
        .block(table_block(
            Rect::from_inches(0.6, 1.7, 5.5, 2.5),
            &["시점", "충전소 수", "비고"],
            &[
                &["2019년", "~30기", "초기 단계"],
                &["2022년", "~170기", "목표 310기 대비 55%"],
                &["2024년 말", "386기", "목표 385기 달성"],
                &["2025년 3월", "407기", "운영 중"],
                &["2030년 목표", "660기", "-"],
            ],
            Some(widths_in(&[1.5, 1.5, 2.5])),
            14.0,
            12.0,
        ))
        .block(caption(
            Rect::from_inches(0.6, 4.4, 5.5, 0.3),
            "충전소 수익성 위기",
            15.0,
            ColorToken::AccentRed,
        ))
        .block(table_block(
            Rect::from_inches(0.6, 4.7, 5.5, 2.0),
            &["항목", "수치"],
            &[
                &["1기 설치비", "30~50억 원"],
                &["평균 가동률", "20~25%"],
                &["일 평균 충전", "4대에 불과"],
                &["흑자 충전소", "전국 7곳뿐"],
                &["수소 판매가(2025.7)", "10,239원/kg"],
                &["하이넷 4년 누적 적자", "166억 원"],
            ],
            Some(widths_in(&[2.5, 3.0])),
            14.0,
            12.0,
        ))
        .block(chip_block(
            Rect::from_inches(6.5, 1.5, 6.3, 1.5),
            ColorToken::Primary,
            "충전 인프라 주요 기업\n효성중공업: 시장점유율 1위, 액화수소충전소 21개 계획\nSK E&S: 2026년까지 30개소(현재 17개소)\n하이넷: 만성 적자(4년 166억 원)",
            13.0,
        ))
        .block(chip_block(
            Rect::from_inches(6.5, 3.3, 6.3, 1.5),
            ColorToken::AccentRed,
            "수소 가격 지속 인상\n2021년 8,000원/kg → 2025년 10,239원/kg\nkm당 비용: FCEV 100~120원 vs BEV 40~60원\nFCEV가 BEV의 약 2배",
            13.0,
        ))
        .block(chip_block(
            Rect::from_inches(6.5, 5.1, 6.3, 1.3),
            ColorToken::AccentOrange,
            "BEV 충전기 수만 기 vs 수소 407기\n비율 1:100 이상\n인프라 격차 해소가 최대 과제",
            14.0,
        ))
}

fn korea_policy() -> SlideSpec {
    SlideSpec::content("한국 수소 정책 프레임워크 & 보조금 비교")
        .block(caption(
            Rect::from_inches(0.6, 1.35, 6.5, 0.3),
            "정부 정책 프레임워크",
            15.0,
            ColorToken::Primary,
        ))
        .block(table_block(
            Rect::from_inches(0.6, 1.7, 6.5, 2.5),
            &["정책", "시기", "핵심 내용"],
            &[
                &["수소경제 활성화 로드맵", "2019.1", "수소차/연료전지 중심 초기 전략"],
                &["수소법(세계 최초)", "2020.2", "수소경제 육성 및 안전관리"],
                &["제1차 수소경제 이행 계획", "2021.11", "청정수소 중심 전환, 탄소중립"],
                &["청정수소발전 입찰시장", "2024.5", "세계 최초(낙찰률 11.5% 실패)"],
                &["CHPS 제도", "2024", "수소발전 의무화(폐기론 대두)"],
            ],
            Some(widths_in(&[2.5, 1.2, 2.8])),
            14.0,
            11.0,
        ))
        .block(caption(
            Rect::from_inches(0.6, 4.4, 6.5, 0.3),
            "보조금 비교: 넥쏘 vs BEV",
            15.0,
            ColorToken::Primary,
        ))
        .block(table_block(
            Rect::from_inches(0.6, 4.7, 6.5, 2.0),
            &["항목", "넥쏘 2세대(FCEV)", "EV6 등(BEV)"],
            &[
                &["차량 가격", "~7,200만 원", "~5,000만 원"],
                &["국비 보조금", "~2,250만 원", "~780만 원"],
                &["지자체 보조금", "~1,000만 원", "~400만 원"],
                &["실구매가", "~3,950만 원", "~3,820만 원"],
                &["보조금 없을 때", "7,200만 원", "5,000만 원"],
            ],
            Some(widths_in(&[2.0, 2.3, 2.2])),
            14.0,
            12.0,
        ))
        .block(chip_block(
            Rect::from_inches(7.5, 1.5, 5.3, 1.5),
            ColorToken::Primary,
            "2030/2050 수치 목표\n수소차 18만 대 / 충전소 660기(2030)\n수소차 620만 대 / 충전소 1,200기(2040)\n수소 공급 2,790만 톤(2050)",
            13.0,
        ))
        .block(chip_block(
            Rect::from_inches(7.5, 3.3, 5.3, 1.5),
            ColorToken::AccentRed,
            "보조금 의존 구조\n보조금 없으면 수소차는\nBEV 대비 44% 비싸\n시장 자생력 부재",
            15.0,
        ))
        .block(chip_block(
            Rect::from_inches(7.5, 5.1, 5.3, 1.3),
            ColorToken::AccentOrange,
            "R&D 예산 감소\n2023년 3,339억 원\n→ 2025년 2,611억 원\n2년 연속 감소",
            14.0,
        ))
}

fn korea_investment() -> SlideSpec {
    SlideSpec::content("한국 대기업 그룹 수소 투자 규모 (2030년까지)")
        .block(table_block(
            Rect::from_inches(0.6, 1.5, 8.0, 3.8),
            &["기업 그룹", "투자 규모", "주요 분야"],
            &[
                &["SK 그룹", "18.5조 원", "수소 생산/유통/충전/SOFC 발전"],
                &["현대차그룹", "11.1조 원", "FCEV, HTWO 시스템, 인프라"],
                &["포스코 그룹", "~10조 원", "수소환원제철, 수소 생산"],
                &["한화 그룹", "수조 원", "수전해, 그린수소, 태양광"],
                &["효성 그룹", "1조 원+", "액화수소, 탄소섬유, 충전시스템"],
                &["5개 그룹 합산", "~43.4조 원", "수소 밸류체인 전 분야"],
            ],
            Some(widths_in(&[2.0, 2.0, 4.0])),
            14.0,
            13.0,
        ))
        .block(chip_block(
            Rect::from_inches(9.0, 1.5, 3.8, 2.0),
            ColorToken::Primary,
            "현대 HTWO 전략\n2030년 70만 기 FC 판매 목표\n중국 광저우 해외 첫 공장\n2025.6 현대모비스 FC사업 인수\nR&D→생산 원스톱 체제",
            13.0,
        ))
        .block(chip_block(
            Rect::from_inches(9.0, 3.8, 3.8, 1.5),
            ColorToken::Accent,
            "HTWO Energy Savannah\nClass-8 대형트럭 전용\n수소+전기 복합 충전 스테이션\n(업계 최초)",
            13.0,
        ))
        .block(chip_block(
            Rect::from_inches(9.0, 5.5, 3.8, 1.0),
            ColorToken::AccentOrange,
            "5대 그룹 총 ~43.4조 원\n수소 밸류체인 전 분야 투자",
            14.0,
        ))
}

fn korea_supply_chain() -> SlideSpec {
    SlideSpec::content("한국 수소차 밸류체인 & 핵심부품 국산화 현황")
        .block(text_at(
            Rect::from_inches(0.6, 1.5, 6.0, 3.0),
            vec![
                heading("밸류체인별 주요 기업", 16.0),
                sub("수소 생산: SK E&S(블루수소, 보령 연 25만톤), 한화솔루션(수전해)", 12.0),
                sub("수소 저장: 효성첨단소재(TANSOM), 일진하이솔루스(Type IV), 가드넥", 12.0),
                sub("FC 스택: 현대차(PEMFC 차량용), 두산(PAFC/SOFC), 블룸SK(SOFC)", 12.0),
                sub("핵심 부품: 코오롱(전해질막, 국내 유일), 케이퓨얼셀(분리판, 원가 70%↓)", 12.0),
                sub("핵심 부품: 에프씨엠티(MEA 연 20만장), 제이앤티지(GDL 최초 상용화)", 12.0),
                sub("스타트업: 에스퓨얼셀(건물용 50%+), 미코파워(독자 SOFC), 엘켐텍", 12.0),
            ],
        ))
        .block(caption(
            Rect::from_inches(0.6, 4.7, 6.0, 0.3),
            "핵심부품 국산화율",
            15.0,
            ColorToken::AccentRed,
        ))
        .block(table_block(
            Rect::from_inches(0.6, 5.0, 6.0, 1.8),
            &["부품", "국산화율", "평가"],
            &[
                &["전해질막(PEM)", "10~20%", "심각 미흡"],
                &["촉매(Pt/C)", "10~15%", "심각 미흡"],
                &["MEA", "20~30%", "미흡"],
                &["GDL", "50~60%", "양호"],
                &["분리판", "60~70%", "양호"],
                &["BOP 부품", "70~80%", "양호"],
            ],
            Some(widths_in(&[2.0, 1.5, 2.5])),
            14.0,
            11.0,
        ))
        .block(chip_block(
            Rect::from_inches(7.0, 1.5, 5.8, 1.5),
            ColorToken::AccentRed,
            "핵심 소재 격차\n전해질막(10~20%), 촉매(10~15%)\n선도국 대비 5~7년 격차\n공급망 리스크 노출",
            14.0,
        ))
        .block(chip_block(
            Rect::from_inches(7.0, 3.3, 5.8, 1.5),
            ColorToken::Primary,
            "중국의 급추격\n부품 국산화율 70%+\n연료전지 특허 글로벌 69% 장악\n비용 연 33% 하락",
            14.0,
        ))
        .block(chip_block(
            Rect::from_inches(7.0, 5.1, 5.8, 1.3),
            ColorToken::Accent,
            "범한퓨얼셀\n잠수함 AIP용 PEMFC\n100% 국산화 성공",
            14.0,
        ))
}

fn korea_global_status() -> SlideSpec {
    SlideSpec::content("한국의 글로벌 위상 — 분야별 순위")
        .block(table_block(
            Rect::from_inches(0.6, 1.5, 8.0, 3.8),
            &["분야", "한국의 위상", "비고"],
            &[
                &["수소전기차 판매", "세계 1위(현대차)", "점유율 42.9%"],
                &["수소차 보유 대수", "세계 2위", "누적 ~4만 대"],
                &["수소 대형트럭 해외 배치", "세계 1위", "XCIENT 228대+"],
                &["수소버스 보급", "세계 최상위", "2,066대"],
                &["발전용 연료전지 설치량", "세계 1위", "1,036MW(1GW 돌파)"],
                &["수소법 제정", "세계 최초", "2020년"],
                &["수소충전소 수", "세계 2위", "407기"],
            ],
            Some(widths_in(&[3.0, 2.0, 3.0])),
            14.0,
            13.0,
        ))
        .block(chip_block(
            Rect::from_inches(9.0, 1.5, 3.8, 1.3),
            ColorToken::AccentRed,
            "충전 인프라 부족\n407기 vs BEV 수만 기\nkm당 비용 BEV의 2배",
            13.0,
        ))
        .block(chip_block(
            Rect::from_inches(9.0, 3.0, 3.8, 1.3),
            ColorToken::AccentOrange,
            "그린수소 확보 문제\n90%+ 그레이수소\n2030년 청정수소 74% 수입",
            13.0,
        ))
        .block(chip_block(
            Rect::from_inches(9.0, 4.5, 3.8, 1.0),
            ColorToken::Primary,
            "경제성 미확보\n보조금 없이 자생력 부재\nR&D 예산 2년 연속 감소",
            13.0,
        ))
        .block(chip_block(
            Rect::from_inches(9.0, 5.7, 3.8, 1.0),
            ColorToken::PrimarySoft,
            "BEV 경쟁 압박\n승용: BEV 20만 vs FCEV 6,800\n비율 약 1:30",
            13.0,
        ))
}

fn bev_vs_fcev_specs() -> SlideSpec {
    SlideSpec::content("BEV vs FCEV — 핵심 사양 비교")
        .block(table_block(
            Rect::from_inches(0.6, 1.5, 8.5, 4.5),
            &["비교 항목", "FCEV", "BEV", "유리한 쪽"],
            &[
                &["에너지 효율(WtW)", "25~35%", "70~90%", "BEV"],
                &["1회 충전 주행거리", "500~720km+", "300~600km", "FCEV"],
                &["충전 시간", "3~5분", "급속 20~40분", "FCEV"],
                &["차량 중량", "상대적 경량", "배터리 400~800kg", "FCEV"],
                &["저온 성능(-30°C)", "거의 유지", "20~40% 감소", "FCEV"],
                &["차량 가격", "7,000~8,000만", "4,000~6,000만", "BEV"],
                &["km당 에너지 비용", "100~120원", "40~60원", "BEV"],
                &["충전 인프라 수", "~1,200개소", "수백만 기", "BEV"],
            ],
            Some(widths_in(&[2.8, 2.0, 2.0, 1.7])),
            14.0,
            12.0,
        ))
        .block(chip_block(
            Rect::from_inches(9.5, 1.5, 3.5, 2.0),
            ColorToken::Primary,
            "에너지 효율 핵심\nFCEV: 최종 18~32%\nBEV: 최종 64~77%\n동일 재생에너지로\nBEV가 2~3배 더 많은\n주행거리 달성",
            12.0,
        ))
        .block(chip_block(
            Rect::from_inches(9.5, 3.8, 3.5, 1.5),
            ColorToken::Accent,
            "FCEV 강점\n충전 3~5분\n주행거리 720km+\n저온 성능 유지",
            14.0,
        ))
        .block(chip_block(
            Rect::from_inches(9.5, 5.5, 3.5, 1.0),
            ColorToken::AccentRed,
            "BEV 강점\n효율 2~3배 / 비용 절반\n인프라 압도적",
            14.0,
        ))
}

fn tco_environment() -> SlideSpec {
    SlideSpec::content("TCO(총소유비용) & 환경성 비교")
        .block(caption(
            Rect::from_inches(0.6, 1.35, 6.5, 0.3),
            "승용차 TCO 비교 — 10년/15만km",
            15.0,
            ColorToken::Primary,
        ))
        .block(table_block(
            Rect::from_inches(0.6, 1.7, 6.5, 2.5),
            &["항목", "FCEV", "BEV", "내연기관"],
            &[
                &["차량 구입(보조금 후)", "~3,950만", "~3,820만", "~3,500만"],
                &["연료/전기(10년)", "~1,800만", "~600만", "~2,000만"],
                &["유지보수(10년)", "~350만", "~230만", "~700만"],
                &["보험(10년)", "~380만", "~380만", "~400만"],
                &["10년 TCO", "~6,480만", "~4,650만", "~6,600만"],
            ],
            Some(widths_in(&[2.0, 1.5, 1.5, 1.5])),
            14.0,
            12.0,
        ))
        .block(caption(
            Rect::from_inches(0.6, 4.4, 6.5, 0.3),
            "Well-to-Wheel CO₂ 배출량 (g/km)",
            15.0,
            ColorToken::Primary,
        ))
        .block(table_block(
            Rect::from_inches(0.6, 4.7, 6.5, 1.8),
            &["시나리오", "FCEV", "BEV", "내연기관"],
            &[
                &["그레이수소+화석전기", "180~200", "100~150", "~200"],
                &["블루수소+평균전력망", "80~120", "50~80", "-"],
                &["그린수소+재생에너지", "0~10", "0~5", "-"],
            ],
            Some(widths_in(&[2.5, 1.5, 1.3, 1.2])),
            14.0,
            12.0,
        ))
        .block(chip_block(
            Rect::from_inches(7.5, 1.5, 5.3, 1.5),
            ColorToken::AccentRed,
            "TCO 결론\nBEV가 FCEV 대비 약 28% 저렴\n연료비 격차가 핵심\n(600만 vs 1,800만 원/10년)",
            14.0,
        ))
        .block(chip_block(
            Rect::from_inches(7.5, 3.3, 5.3, 1.5),
            ColorToken::Accent,
            "대형 트럭 — FCEV 역전 가능\nMcKinsey: 2030년 이후\n장거리 대형 트럭 TCO 동등/유리\n배터리 4~8톤→화물 20~30%↓",
            14.0,
        ))
        .block(chip_block(
            Rect::from_inches(7.5, 5.1, 5.3, 1.3),
            ColorToken::Primary,
            "환경성 현실\n수소 99% 그레이수소\n현 상태에서 BEV가 유리\n그린수소 전환이 관건",
            14.0,
        ))
}

fn optimal_applications() -> SlideSpec {
    SlideSpec::content("용도별 최적 기술 — BEV vs FCEV 역할 분담")
        .block(table_block(
            Rect::from_inches(0.6, 1.5, 8.0, 4.8),
            &["용도", "최적 기술", "이유"],
            &[
                &["도심 승용차", "BEV", "짧은 통근, 가정 충전, 비용 효율"],
                &["택시/라이드헤일링", "FCEV", "빠른 충전, 장시간 운행"],
                &["시내버스", "BEV/FCEV", "노선 길이에 따라 혼용"],
                &["장거리 고속버스", "FCEV", "주행거리, 충전 시간 우위"],
                &["소형 배송 트럭", "BEV", "도심 단거리, 야간 충전"],
                &["대형 장거리 트럭", "FCEV", "페이로드, 주행거리, 충전시간"],
                &["물류 지게차", "FCEV", "24시간 가동, 2분 충전, 냉동창고"],
                &["선박", "FCEV/수소", "장기 항해, 대용량 에너지"],
                &["항공기", "FCEV/e-Fuel", "에너지밀도 우위 필수"],
            ],
            Some(widths_in(&[2.5, 1.5, 4.0])),
            14.0,
            12.0,
        ))
        .block(chip_block(
            Rect::from_inches(9.0, 1.5, 3.8, 2.5),
            ColorToken::Primary,
            "BEV 영역\n도심 승용차\n소형 배송 트럭\n단거리·소형 차량\n→ BEV가 절대 우위",
            14.0,
        ))
        .block(chip_block(
            Rect::from_inches(9.0, 4.3, 3.8, 2.5),
            ColorToken::Accent,
            "FCEV 영역\n대형 트럭 / 고속버스\n택시 / 지게차\n선박 / 항공\n→ FCEV가 비교우위",
            14.0,
        ))
}

fn market_comparison() -> SlideSpec {
    SlideSpec::content("BEV vs FCEV — 글로벌 판매 전망 비교")
        .block(caption(
            Rect::from_inches(0.6, 1.35, 6.5, 0.3),
            "글로벌 판매 전망",
            15.0,
            ColorToken::Primary,
        ))
        .block(table_block(
            Rect::from_inches(0.6, 1.7, 6.5, 1.8),
            &["구분", "2025년", "2030년", "2035년"],
            &[
                &["BEV", "~1,700만 대", "~3,500~4,000만", "신차 60~75%"],
                &["FCEV", "~2만 대", "~20만 대", "~60만 대"],
                &["BEV/FCEV 비율", "850:1", "175~200:1", "100:1"],
            ],
            Some(widths_in(&[1.5, 1.8, 2.0, 1.2])),
            14.0,
            13.0,
        ))
        .block(caption(
            Rect::from_inches(0.6, 3.7, 6.5, 0.3),
            "기관별 전망 요약",
            15.0,
            ColorToken::Primary,
        ))
        .block(table_block(
            Rect::from_inches(0.6, 4.0, 6.5, 2.5),
            &["기관", "BEV 전망", "FCEV 전망", "핵심 메시지"],
            &[
                &["IEA", "EV의 95%+", "승용 0.2~0.5%", "수소는 비전기화 분야"],
                &["BNEF", "신차 42~58%", "신차 0.22%", "승용 FCEV 경쟁 불가"],
                &["McKinsey", "승용 주도", "트럭 15~25%", "상용차 TCO 경쟁적"],
                &["IRENA", "소형차 주류", "장거리 30%", "1.5°C에 수소 필수"],
            ],
            Some(widths_in(&[1.2, 1.8, 1.7, 1.8])),
            14.0,
            11.0,
        ))
        .block(text_at(
            Rect::from_inches(7.5, 1.5, 5.3, 5.0),
            vec![
                heading("제조사 전략 분류", 16.0),
                gap(),
                line("BEV 올인(수소 거부)", 14.0, true, ColorToken::AccentRed),
                sub("테슬라, BYD, 폭스바겐", 13.0),
                gap(),
                line("BEV 중심 + 수소 유보/철수", 14.0, true, ColorToken::AccentOrange),
                sub("GM, Ford, Stellantis(중단)", 13.0),
                gap(),
                line("BEV + FCEV 병행(가장 적극적)", 14.0, true, ColorToken::Accent),
                sub("현대차(넥쏘+XCIENT+HTWO)", 13.0),
                sub("도요타(미라이+BMW 협력)", 13.0),
                sub("BMW(2028 양산), 혼다(150kW FC)", 13.0),
            ],
        ))
}

fn scenarios() -> SlideSpec {
    SlideSpec::content("공존 vs 경쟁 시나리오 — BEV & FCEV의 미래")
        .block(chip_block(
            Rect::from_inches(0.6, 1.5, 3.9, 5.0),
            ColorToken::Accent,
            "시나리오 A: 공존(보완 기술)\n확률 60~70%\n\n가장 유력한 시나리오\n\n• 도심/단거리 승용:\n  BEV 95%+ 주류\n\n• 장거리/대형/고사이클:\n  FCEV 15~25%\n\n• 수소: 산업/발전/저장\n  역할 분담",
            13.0,
        ))
        .block(chip_block(
            Rect::from_inches(4.8, 1.5, 3.9, 5.0),
            ColorToken::AccentOrange,
            "시나리오 B: BEV 지배\n확률 20~30%\n\nFCEV 주변화 가능\n\n• 전고체 배터리 상용화\n  (2027~2030)\n\n• 초급속 충전 보급\n\n• 수소 인프라 투자 부족\n\n• 선박/항공/산업 외\n  거의 소멸",
            13.0,
        ))
        .block(chip_block(
            Rect::from_inches(9.0, 1.5, 3.8, 5.0),
            ColorToken::AccentRed,
            "시나리오 C: FCEV 급성장\n확률 5~10%\n\n현실 가능성 낮음\n\n• 그린수소 $1/kg 달성\n\n• 연료전지 $30/kW 이하\n\n• 대규모 인프라 투자\n\n• 전체 신차 5~10%\n  확대 가능",
            13.0,
        ))
}

fn five_variables() -> SlideSpec {
    SlideSpec::content("FCEV 성패를 결정할 5대 핵심 변수")
        .block(table_block(
            Rect::from_inches(0.6, 1.5, 12.1, 3.0),
            &["변수", "현재", "목표", "달성 시 영향"],
            &[
                &["그린수소 비용", "$3~8/kg", "$1~2/kg", "연료비 경쟁력 확보"],
                &["연료전지 비용", "$80~100/kW", "$35/kW", "차량 가격 내연기관 수준"],
                &["충전 인프라", "~1,200개소", "수만 개소", "소비자 접근성 해소"],
                &["스택 내구성", "5,000~8,000시간", "30,000시간", "상용차 TCO 확보"],
                &["정부 정책 일관성", "불확실", "장기 안정적", "민간 투자 유치"],
            ],
            Some(widths_in(&[2.5, 2.5, 2.5, 4.6])),
            14.0,
            13.0,
        ))
        .block(caption(
            Rect::from_inches(0.6, 4.7, 12.0, 0.3),
            "전문가 합의 사항",
            16.0,
            ColorToken::Primary,
        ))
        .block(table_block(
            Rect::from_inches(0.6, 5.0, 12.1, 1.8),
            &["#", "합의 내용"],
            &[
                &["1", "승용차 시장은 BEV의 압도적 승리가 거의 확실"],
                &["2", "대형 상용차(트럭/버스)에서 FCEV의 역할이 존재"],
                &["3", "수소는 모빌리티를 넘어 산업/발전/저장 분야에서 필수적"],
                &["4", "2050 탄소중립 달성에 수소와 BEV 모두 필요"],
                &["5", "FCEV의 성패는 수소 비용 하락 속도에 달려 있음"],
            ],
            Some(widths_in(&[0.5, 11.6])),
            14.0,
            12.0,
        ))
}

fn korea_strategy() -> SlideSpec {
    let strategies = [
        (
            "1. 승용 FCEV\n보조금 점진적 축소",
            "넥쏘 42.9% 점유율은 보조금 기반\n장기 지속가능하지 않음\n보조금 의존 구조에서 탈피 필요",
            ColorToken::AccentRed,
        ),
        (
            "2. 대형 상용차\n선택과 집중",
            "XCIENT 유럽/북미 2,000만km 실적\n수소 트럭/버스 공격적 확대\n글로벌 선두 + BEV 대비 비교우위",
            ColorToken::Accent,
        ),
        (
            "3. 핵심 소재\n국산화 가속",
            "전해질막 10~20%, 촉매 10~15%\n해외 의존도 → 공급망 리스크\n선도국 대비 5~7년 격차 해소",
            ColorToken::Primary,
        ),
        (
            "4. 그린수소\n전환 가속",
            "수소 90%가 그레이수소\n'친환경' 명분 성립 안 됨\n수전해 기반 비중 확대 시급",
            ColorToken::AccentOrange,
        ),
        (
            "5. K-조선·선박\n시너지",
            "한국 조선 산업 + 수소 FC 결합\n수소 선박 = 독자적 블루오션\n한국만의 강점 발휘 영역",
            ColorToken::PrimarySoft,
        ),
    ];
    let mut spec = SlideSpec::content("한국에 대한 전략적 권고 — 5대 핵심 방향");
    for (index, (title, desc, color)) in strategies.iter().enumerate() {
        let top = 1.5 + index as f64 * 1.1;
        spec = spec
            .block(chip_block(
                Rect::from_inches(0.6, top, 2.8, 0.95),
                *color,
                title,
                13.0,
            ))
            .block(text_at(
                Rect::from_inches(3.7, top, 9.0, 0.95),
                vec![ParaSpec {
                    runs: vec![run(desc, 14.0, false, ColorToken::Text)],
                    ..Default::default()
                }],
            ));
    }
    spec
}

fn key_numbers() -> SlideSpec {
    let items = [
        ("글로벌 FCEV 판매\n2024년", "~16,000대\n(BEV의 0.1%)", ColorToken::Primary),
        ("넥쏘 글로벌 점유율\n2025년", "42.9%\n세계 1위", ColorToken::Accent),
        ("BEV vs FCEV\n규모 격차", "약 850배\n(1,380만 vs 1.6만)", ColorToken::AccentRed),
        ("수소 충전소\n전 세계", "~1,200개\n(EV 수백만 기)", ColorToken::PrimarySoft),
        ("충전소 설치비\n수소 vs EV", "30~100배\n비싸", ColorToken::AccentOrange),
        ("TCO 격차\n승용 10년", "BEV 28%\n더 저렴", ColorToken::AccentBlue),
        ("5대 그룹\n총 투자", "~43.4조 원\n(2030년까지)", ColorToken::Primary),
        ("공존 시나리오\n확률", "60~70%\n가장 유력", ColorToken::Accent),
    ];
    let mut spec = SlideSpec::content("핵심 수치 대시보드 — 한눈에 보는 수소차 시장");
    for (index, (title, value, color)) in items.iter().enumerate() {
        let col = index % 4;
        let row = index / 4;
        spec = spec.block(chip_block(
            Rect::from_inches(0.6 + col as f64 * 3.15, 1.5 + row as f64 * 2.8, 2.9, 2.5),
            *color,
            &format!("{title}\n\n{value}"),
            14.0,
        ));
    }
    spec
}

fn conclusion() -> SlideSpec {
    SlideSpec::closing(ClosingContent {
        title: "종합 결론".to_string(),
        messages: vec![
            ClosingMessage::new(
                "1",
                "승용차: BEV의 확정적 승자",
                &["FCEV는 0.5% 미만 니치 시장에 머물 전망"],
            ),
            ClosingMessage::new(
                "2",
                "대형 상용차: FCEV의 비교우위 영역",
                &["트럭/버스/선박에서 역할 존재 — 수소는 산업/발전/저장으로 확장"],
            ),
            ClosingMessage::new(
                "3",
                "경쟁이 아닌 공존",
                &[
                    "\"수소는 만능이 아니다. 그러나 수소 없이 탄소중립은 불가능하다.\"",
                    "한국 전략: 승용 보조금 축소 → 대형 상용차 집중 → 핵심소재 국산화 → 그린수소 전환 → K-조선 시너지",
                ],
            ),
        ],
        thanks: "감사합니다  |  Thank You".to_string(),
    })
}

/// The full 28-slide deck.
pub fn deck() -> Deck {
    let mut deck = Deck::new(
        "hydrogen-car",
        "수소자동차_시장분석_발표자료.pptx",
        Theme::business(),
    );
    for spec in [
        cover(),
        toc(),
        global_market(),
        country_status(),
        key_models(),
        other_models(),
        charging_infra(),
        market_outlook(),
        government_policy(),
        commercial_vehicles(),
        other_mobility(),
        stack_technology(),
        cost_storage(),
        korea_market(),
        korea_infra_crisis(),
        korea_policy(),
        korea_investment(),
        korea_supply_chain(),
        korea_global_status(),
        bev_vs_fcev_specs(),
        tco_environment(),
        optimal_applications(),
        market_comparison(),
        scenarios(),
        five_variables(),
        korea_strategy(),
        key_numbers(),
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
    fn test_deck_builds() {
        let deck = deck();
        let prs = deck.build().unwrap();
        assert_eq!(prs.slide_count(), 28);
    }

    #[test]
    fn test_dashboard_grid() {
        // 8 chips, two rows of four
        assert_eq!(key_numbers().blocks.len(), 8);
    }

    #[test]
    fn test_strategy_rows() {
        // 5 chip + text pairs
        assert_eq!(korea_strategy().blocks.len(), 10);
    }
}
