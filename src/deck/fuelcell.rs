//! 연료전지 산업 동향 deck, 25 slides.

use super::Deck;
use super::{
    chip_block, heading, line, panel_block, part_toc, run, sub, table_block, widths_in,
};
use crate::common::{Rect, RgbColor};
use crate::compose::{
    Block, ClosingContent, ClosingMessage, CoverContent, CoverLine, ParaSpec, SlideSpec,
};
use crate::theme::{ColorToken, Theme};

fn body(paras: Vec<ParaSpec>) -> Block {
    Block::Text {
        rect: Rect::from_inches(0.8, 1.5, 11.7, 5.2),
        paras,
    }
}

fn text_at(rect: Rect, paras: Vec<ParaSpec>) -> Block {
    Block::Text { rect, paras }
}

/// Two-space indented list lines in the hanging style used by body slides.
fn indented(lines: &[&str], size: f64, space_after: f64) -> Vec<ParaSpec> {
    lines
        .iter()
        .map(|text| ParaSpec {
            space_after: Some(space_after),
            runs: vec![run(&format!("  {text}"), size, false, ColorToken::Text)],
            ..Default::default()
        })
        .collect()
}

fn cover() -> SlideSpec {
    SlideSpec::cover(CoverContent {
        title: "연료전지(Fuel Cell) 산업 동향".to_string(),
        subtitle: "글로벌 시장 동향 | 미국·중국 경쟁 구도 | 한국의 현주소와 전망".to_string(),
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
            "글로벌 연료전지 시장 동향",
            "시장 규모, 유형별 동향, 응용 분야, 주요국 정책",
        ),
        ("Part 2", "미국 연료전지 산업", "정책, 주요 기업, R&D, 응용 분야"),
        (
            "Part 3",
            "중국 연료전지 산업",
            "정책, 주요 기업, 기술 수준, 상용차 중심",
        ),
        ("Part 4", "미국 vs 중국 경쟁 구도", "전략 비교, 강점·약점, 향후 전망"),
        (
            "Part 5",
            "한국의 현주소와 전망",
            "시장, 기업, R&D, 인프라, 달성률, 기술격차, 충전소위기",
        ),
    ]))
}

fn global_market() -> SlideSpec {
    SlideSpec::content("글로벌 연료전지 시장 규모 및 성장 전망")
        .block(text_at(
            Rect::from_inches(0.8, 1.5, 11.7, 1.2),
            vec![
                line("2025년 시장 규모: 약 107.6억~129.4억 달러", 18.0, true, ColorToken::Text),
                line("2030년까지 CAGR 20~27%로 고속 성장 전망", 18.0, true, ColorToken::Text),
                line(
                    "아시아태평양 지역이 시장 점유율 42.7%로 최대 시장",
                    16.0,
                    false,
                    ColorToken::Text,
                ),
            ],
        ))
        .block(table_block(
            Rect::from_inches(0.8, 3.2, 7.5, 3.0),
            &["조사기관", "2030년 전망", "CAGR"],
            &[
                &["Grand View Research", "369.8억 달러", "27.1%"],
                &["MarketsandMarkets", "181.6억 달러", "26.3%"],
                &["Wissen Research", "210억 달러", "25.0%"],
                &["MarkNtel Advisors", "81.3억 달러", "20.4%"],
            ],
            Some(widths_in(&[3.0, 2.5, 2.0])),
            14.0,
            13.0,
        ))
        .block(chip_block(
            Rect::from_inches(9.0, 3.2, 3.8, 1.2),
            ColorToken::Primary,
            "2034년 장기 전망\n372억~957억 달러",
            16.0,
        ))
        .block(chip_block(
            Rect::from_inches(9.0, 4.6, 3.8, 1.2),
            ColorToken::Accent,
            "핵심 성장 동인\nAI 데이터센터 + 상용차",
            16.0,
        ))
}

fn fc_types() -> SlideSpec {
    SlideSpec::content("연료전지 유형별 동향").block(table_block(
        Rect::from_inches(0.6, 1.5, 12.1, 5.0),
        &["유형", "시장 점유율", "주요 특성", "핵심 동향"],
        &[
            &[
                "PEMFC\n(고분자전해질막)",
                "60~67%\n(1위)",
                "작동온도 60~80°C\n빠른 기동, 높은 출력밀도",
                "백금 사용량 90% 감소 달성\nFe-N-C 촉매 0.85 W/cm²",
            ],
            &[
                "SOFC\n(고체산화물)",
                "~20%",
                "작동온도 600~1,000°C\n효율 60~75%, 다연료 가능",
                "AI 데이터센터 전력 공급 폭발적 성장\nBloom Energy 1GW 공급계약",
            ],
            &[
                "MCFC\n(용융탄산염)",
                "~15%",
                "작동온도 ~650°C\n대규모 산업/발전용",
                "FuelCell Energy 주도\n대형 분산발전",
            ],
            &[
                "PAFC\n(인산형)",
                "기타",
                "중간 온도 작동\n도시가스 기반 분산발전",
                "두산퓨얼셀 PureCell 시리즈\n안정적 발전용",
            ],
        ],
        Some(widths_in(&[1.8, 2.0, 4.5, 3.8])),
        14.0,
        12.0,
    ))
}

fn applications() -> SlideSpec {
    SlideSpec::content("주요 응용 분야별 동향")
        .block(panel_block(
            Rect::from_inches(0.6, 1.5, 3.7, 5.0),
            ColorToken::Primary,
            "고정형 발전\n(시장 점유율 68.8%)\n\n━━━━━━━━━━━━\n\nAI 데이터센터 전력 수요\n급증이 핵심 성장 동인\n\n2026년 = 'SOFC의 해'\n\n2030년까지 데이터센터\n38%가 온사이트 발전 활용",
            14.0,
        ))
        .block(panel_block(
            Rect::from_inches(4.6, 1.5, 3.7, 5.0),
            ColorToken::PrimarySoft,
            "수송 분야\n(최고 성장률)\n\n━━━━━━━━━━━━\n\n2025 수소차 16,011대 판매\n(전년 대비 +24.4%)\n\n현대차 42.9% 세계 1위\n\n수소 상용차 CAGR 47.7%\n(2025~2032)",
            14.0,
        ))
        .block(panel_block(
            Rect::from_inches(8.6, 1.5, 4.1, 5.0),
            ColorToken::AccentBlue,
            "신규 응용 분야\n\n━━━━━━━━━━━━\n\n[해양] 한화에어로 200kW\n선박용 연료전지, DNV 인증\n\n[항공] ZeroAvia\n1.0 kW/kg 출력밀도 달성\n\n[군사] UAV 비행시간\n2h → 6h+ 연장\n\n[휴대용] CAGR 14%+",
            14.0,
        ))
}

fn global_policy() -> SlideSpec {
    SlideSpec::content("세계 주요국 수소/연료전지 정책 현황").block(table_block(
        Rect::from_inches(0.6, 1.5, 12.1, 5.2),
        &["국가", "핵심 정책", "주요 내용"],
        &[
            &[
                "미국",
                "Hydrogen Shot + IRA",
                "2031년까지 $1/kg 목표 | H2Hubs 70억$ (일부 삭감) | 45V 세액공제",
            ],
            &[
                "EU",
                "EU 수소전략 + REPowerEU",
                "2030년 재생수소 2,000만톤 | 전해조 40GW | 1.845억 유로 공모",
            ],
            &[
                "일본",
                "수소기본전략 (2023 개정)",
                "관민 15조 엔(1,000억$) | 에네팜 50만대+ | 세계 최초 수소전략(2017)",
            ],
            &[
                "한국",
                "수소경제 로드맵 + 수소법",
                "세계 최초 수소법(2020) | 2040년 FCEV 620만대 | 발전용 15GW",
            ],
            &[
                "중국",
                "수소 중장기 계획 (2021-2035)",
                "2025년 FCV 5만대 목표 | 에너지법에 수소 포함 | 24개 성시 33건 정책",
            ],
        ],
        Some(widths_in(&[1.5, 3.5, 7.1])),
        14.0,
        13.0,
    ))
}

fn us_policy() -> SlideSpec {
    SlideSpec::content("[미국] 수소/연료전지 정책 상세").block(body(vec![
        heading("국가 청정 수소 전략 및 로드맵 (2023)", 18.0),
        sub("2030년까지 연간 수소 생산 1,000만 톤 목표 (현재 7~9 MMTpa 전망)", 15.0),
        heading("인플레이션 감축법(IRA) - Section 45V", 18.0),
        sub("수소 1kg당 최대 $3 세액공제 | 트럼프 행정부 하 공제기간 10년→2년 단축", 15.0),
        heading("지역 청정 수소 허브 (H2Hubs)", 18.0),
        sub("7개 허브에 70억 달러 투자 → 트럼프 행정부, 서부 2개 허브 22억$ 취소", 15.0),
        sub("캘리포니아 ARCHES 12억$ 취소, 태평양 북서부 10억$ 삭감", 15.0),
        heading("Hydrogen Shot (DOE)", 18.0),
        sub("2031년까지 청정수소 비용 80% 절감, $1/kg 달성 목표", 15.0),
        sub("PEM 전해조 자본비용 80% 절감(2005~), 연료전지 시스템 70% 절감(2008~)", 15.0),
        line(
            "정책 리스크: 행정부 교체에 따른 불확실성이 투자 저해 요인",
            16.0,
            true,
            ColorToken::AccentRed,
        ),
    ]))
}

fn us_companies() -> SlideSpec {
    SlideSpec::content("[미국] 주요 연료전지 기업").block(table_block(
        Rect::from_inches(0.6, 1.5, 12.1, 5.2),
        &["기업", "핵심 기술", "주요 실적", "특이사항"],
        &[
            &[
                "Bloom Energy",
                "SOFC",
                "2025 매출 20.2억$ (+37.3%)\n수주잔고 200억$",
                "업계 유일 수익 기업\nAI 데이터센터 핵심",
            ],
            &[
                "Plug Power",
                "PEMFC + 전해조",
                "2025 9개월 4.847억$\nGenEco 230MW+ 파이프라인",
                "Amazon 지게차 15,000대+\n그린수소 통합 솔루션",
            ],
            &[
                "Ballard Power",
                "PEMFC 스택",
                "Q3 매출 3,250만$ (+120%)\n수주잔고 1.328억$",
                "캐나다 본사\nWeichai와 중국 JV",
            ],
            &[
                "Cummins/Accelera",
                "연료전지 + 전해조",
                "린데에 35MW 전해조 납품\n전체 매출 337억$",
                "H2-ICE 병행 추진\n4.58억$ 구조조정",
            ],
            &[
                "Nikola",
                "수소 트럭",
                "2025.2 파산 신청\n트럭 95대 리콜",
                "Chapter 11\n수소트럭 상용화 어려움",
            ],
        ],
        Some(widths_in(&[2.2, 2.5, 4.0, 3.4])),
        14.0,
        11.0,
    ))
}

fn us_applications() -> SlideSpec {
    SlideSpec::content("[미국] 연료전지 응용 분야").block(body(vec![
        heading("물류/지게차 — 가장 상용화된 분야", 18.0),
        sub("Amazon 15,000대+ 운영, 5,000대 추가 계획 | Walmart 대규모 도입", 15.0),
        sub("3분 충전, 교대근무 시 일관된 출력, 배터리 교체 불필요", 15.0),
        heading("AI 데이터센터 분산전원 — 최대 성장 분야", 18.0),
        sub("Bloom Energy: AEP 1GW 계약, Brookfield 50억$ 파트너십", 15.0),
        sub("전력망 연결 수년 소요 → SOFC로 신속한 현장 배치 가능", 15.0),
        heading("군사 응용 — 독보적 영역", 18.0),
        sub("시장규모: 2024년 12억$ → 2033년 39억$ (CAGR 13.8%)", 15.0),
        sub("보병 휴대전원(무게 50% 절감), UAV(비행 6h+), 잠수함(무소음)", 15.0),
        line(
            "수소충전소: 전국 ~51개 (95%가 캘리포니아) — 인프라 극히 부족",
            16.0,
            true,
            ColorToken::AccentRed,
        ),
    ]))
}

fn china_market() -> SlideSpec {
    SlideSpec::content("[중국] 연료전지 시장 현황")
        .block(table_block(
            Rect::from_inches(0.6, 1.5, 7.0, 2.8),
            &["항목", "목표", "실적/달성률"],
            &[
                &["연료전지차(FCV)", "50,000대", "~30,000대 (60%)"],
                &["수소충전소", "1,200개소", "~540개소 (45%)"],
                &["그린수소 생산", "10~20만 톤/년", "진행 중"],
                &["핵심 부품 국산화율", "-", "70% 달성"],
            ],
            Some(widths_in(&[2.8, 2.0, 2.2])),
            14.0,
            13.0,
        ))
        .block(chip_block(
            Rect::from_inches(8.2, 1.5, 4.5, 1.2),
            ColorToken::Primary,
            "시장 규모\n2023년 15.4억$ → 2026년 35.5억$",
            15.0,
        ))
        .block(chip_block(
            Rect::from_inches(8.2, 2.9, 4.5, 1.2),
            ColorToken::Accent,
            "국산 스택\n수입품 대비 60% 저렴",
            15.0,
        ))
        .block(text_at(
            Rect::from_inches(0.8, 4.6, 11.7, 2.0),
            vec![
                heading("중국 수소 에너지 중장기 계획 (2021~2035) — NDRC 발표", 17.0),
                sub(
                    "3단계 로드맵: 1단계(~2025) 프레임워크 → 2단계(~2030) 혁신 시스템 → 3단계(~2035) 다양한 생태계",
                    14.0,
                ),
                sub("2024.11: 24개 성/시에서 33개 신규 수소정책 | 2025.4: 에너지법에 수소 포함", 14.0),
                sub("2025년 재무부 FCV 보조금: 3.21억$ | 5개 시범 도시 클러스터 운영", 14.0),
            ],
        ))
}

fn china_companies() -> SlideSpec {
    SlideSpec::content("[중국] 주요 연료전지 기업").block(table_block(
        Rect::from_inches(0.6, 1.5, 12.1, 5.2),
        &["기업", "본사", "핵심 사업", "특이사항"],
        &[
            &[
                "SinoHytec (이화통)",
                "베이징",
                "수소 연료전지 엔진 개발\nIPO 14억 위안(2.13억$)",
                "Toyota 등 5개사와 공동개발\n시스템 시장 선두",
            ],
            &[
                "Refire (리파이어)",
                "상하이",
                "연료전지 엔진 제조\n(트럭·버스용)",
                "생산능력 1,000대→20,000대\n선제적 확대",
            ],
            &[
                "Weichai Power",
                "산둥성",
                "Ballard와 JV (51:49)\nMEA 장기 독점 공급",
                "SOFC 전략 병행\n국가급 핵심 멤버",
            ],
            &[
                "SAIC Motor",
                "상하이",
                "수소차 10종 출시 계획\nMaxus EUNIQ 7",
                "중국 최대 자동차 그룹\n수소차 전략 추진",
            ],
            &[
                "Sinosynergy",
                "-",
                "CCM 1.5만개/일, MEA 1만개/일\n핵심부품 자체 개발",
                "국산 스택 60% 저렴\n고객 70개사+",
            ],
        ],
        Some(widths_in(&[2.5, 2.0, 4.0, 3.6])),
        14.0,
        11.0,
    ))
}

fn china_applications() -> SlideSpec {
    SlideSpec::content("[중국] 상용차 중심 대규모 보급").block(body(vec![
        line(
            "중국 연료전지 시장의 60%+ = 수송 부문, 상용차가 압도적 비중",
            17.0,
            true,
            ColorToken::Primary,
        ),
        heading("2025년 12월 주요 배치 사례", 17.0),
        sub("광저우 버스그룹: 수소 시내버스 450대 입찰 (Skywell 250대 + King Long 200대)", 15.0),
        sub("저장 롄허수소: 연료전지 세미트럭/덤프트럭 200대 공급", 15.0),
        sub("HTWO 광저우: 18톤 수소 중형트럭 200대 납품", 15.0),
        sub("친링모터스: 신장 하미시, 세계 최대 수소 상용차 시범 프로젝트", 15.0),
        heading("수소충전소 인프라", 17.0),
        sub("2024년 누적 540개소 (세계 최다) | 광둥 68개, 산둥/저장 각 20개+", 15.0),
        sub("Sinopec: 1,000개소 건설 목표 | 13개 성/시가 10개+ 보유", 15.0),
        heading("화물 운송 회랑", 17.0),
        sub("20개+ 주요 회랑에서 200대+ 운행, 40개+ 충전소 지원", 15.0),
    ]))
}

fn us_vs_china() -> SlideSpec {
    SlideSpec::content("미국 vs 중국 연료전지 경쟁 구도").block(table_block(
        Rect::from_inches(0.6, 1.5, 12.1, 5.2),
        &["비교 항목", "미국", "중국"],
        &[
            &[
                "전략 방향",
                "원천기술 + 고부가가치\n(데이터센터, 군사)",
                "대규모 보급 + 비용절감\n(상용차 중심)",
            ],
            &["수소충전소", "~51개 (95% 캘리포니아)", "~540개 (세계 최다)"],
            &["FCV 보유", "소규모 (캘리포니아 중심)", "~30,000대"],
            &[
                "핵심 기술력",
                "SOFC/PEMFC 원천기술\n촉매/MEA 선도",
                "핵심부품 국산화 70%\n비용 절감 우위",
            ],
            &["대표 기업", "Bloom Energy, Plug Power", "SinoHytec, Refire, Weichai"],
            &["주요 강점", "원천기술, 군사, AI DC", "대규모 보급, 인프라, 정책 일관성"],
            &["주요 약점", "인프라 부족, 정책 불확실성", "기술 내구성, 핵심소재 수입"],
        ],
        Some(widths_in(&[2.5, 4.8, 4.8])),
        14.0,
        12.0,
    ))
}

fn korea_market() -> SlideSpec {
    let boxes = [
        ("발전용 연료전지\n1,036MW\n세계 최초 1GW 돌파", ColorToken::Primary),
        ("수소차 등록\n4만 대 돌파\n넥쏘 점유율 42.9%", ColorToken::PrimarySoft),
        ("5대 그룹 투자\n43.4조 원\n밸류체인 전 단계", ColorToken::AccentBlue),
        ("건물용 시장\n2030년\n3.86조 원", ColorToken::Accent),
    ];
    let mut spec = SlideSpec::content("[한국] 연료전지 시장 현황");
    for (index, (text, color)) in boxes.iter().enumerate() {
        spec = spec.block(chip_block(
            Rect::from_inches(0.6 + index as f64 * 3.1, 1.5, 2.8, 1.8),
            *color,
            text,
            16.0,
        ));
    }
    spec.block(text_at(
        Rect::from_inches(0.8, 3.8, 11.7, 2.8),
        vec![
            heading("발전용 연료전지", 17.0),
            sub("세계 최초 1GW 돌파 | 2021년 142.3MW 설치, 세계 시장 45% 점유", 15.0),
            heading("수소차", 17.0),
            sub("현대 넥쏘 2025년 6,861대 판매 (+78.9%) | 신형 넥쏘 월 1,000대+ 출고", 15.0),
            heading("수소버스", 17.0),
            sub("2024년 1,000대+ 신규 보급 (전년 대비 277% 급증) | 2025년 목표 2,000대", 15.0),
        ],
    ))
}

fn korea_policy() -> SlideSpec {
    SlideSpec::content("[한국] 수소경제 정책 체계").block(table_block(
        Rect::from_inches(0.6, 1.5, 12.1, 5.2),
        &["정책명", "시기", "주요 내용"],
        &[
            &["수소경제 활성화 로드맵", "2019.1", "2040년 FCEV 620만대, 충전소 1,200기, 발전 15GW"],
            &["수소법 (세계 최초)", "2020.2", "수소경제 육성 및 수소 안전관리 법률 제정"],
            &["수소경제 이행 기본계획", "2021", "2030 수소 390만톤, 2050 2,790만톤 공급 목표"],
            &["청정수소 인증제", "2024", "세계 최초 청정수소발전 입찰시장 개설 (낙찰률 11.5%)"],
            &["CHPS (의무화제도)", "2024~", "RPS에서 분리, 별도 의무시장 | 2025년 입찰 전격 취소"],
            &["전력수급기본계획", "2027~", "연간 200MW(~2030) → 150MW(~2036) → 100MW 증설"],
        ],
        Some(widths_in(&[3.5, 2.0, 6.6])),
        14.0,
        12.0,
    ))
}

fn korea_companies() -> SlideSpec {
    SlideSpec::content("[한국] 주요 연료전지 기업 생태계").block(table_block(
        Rect::from_inches(0.6, 1.5, 12.1, 5.2),
        &["기업", "핵심 역할", "주요 실적"],
        &[
            &[
                "현대자동차",
                "FCEV (넥쏘, XCIENT), HTWO 시스템",
                "넥쏘 2세대 110kW 스택\n2030년 70만기, 3세대 200kW(2027)",
            ],
            &[
                "두산퓨얼셀",
                "PAFC M400(440kW) + SOFC",
                "SOFC 양산(군산 50MW, 620°C)\nPAFC 국산화율 98%",
            ],
            &[
                "블룸SK퓨얼셀",
                "SOFC 국내 생산 (블룸에너지 JV)",
                "구미 공장 준공, 효율 65%\nDC 330kW 설치(국내 최초)",
            ],
            &[
                "SK그룹",
                "수소 생산-유통-충전 밸류체인",
                "인천 3만톤 액화수소(7,000억원)\n충전소 17개→30개+(2026)",
            ],
            &[
                "효성그룹",
                "충전시스템 1위 + 탄소섬유 + 액화수소",
                "린데 세계최대 액화수소 1.3만톤\n탄소섬유 1조원(2만4천톤)",
            ],
            &[
                "한화솔루션",
                "그린수소 (PEM/AEM 수전해)",
                "평창 연 290톤 그린수소\n2.8조원 투자(태양광+수전해)",
            ],
            &[
                "범한퓨얼셀",
                "PEMFC (잠수함AIP, 선박, 충전소)",
                "장보고III 100% 국산화 납품\n2025년 흑자 전환 전망",
            ],
        ],
        Some(widths_in(&[2.5, 5.0, 4.6])),
        14.0,
        11.0,
    ))
}

fn korea_rd() -> SlideSpec {
    SlideSpec::content("[한국] 연료전지 R&D 핵심 성과")
        .block(table_block(
            Rect::from_inches(0.6, 1.5, 12.1, 4.0),
            &["기관", "연구 내용", "게재지", "시기"],
            &[
                &[
                    "KAIST",
                    "연료전지 촉매 열화 과정 원자 단위 3D 추적 (세계 최초)",
                    "Nature Comm.",
                    "2025.8",
                ],
                &["KAIST", "백금-아연 나노입자 촉매 (백금 사용량 1/3 절감)", "Chem. Eng. J.", "2025.2"],
                &["KAIST", "이리듐 나노시트 촉매 (상용 대비 성능 13배 향상)", "ACS Nano", "2025.12"],
                &["KIST", "친환경 수소 연료전지 성능·효율 증대 핵심 원리 규명", "-", "2025"],
                &["KIER", "고효율 연료전지용 1kW급 스택 제작", "-", "2024-2025"],
                &["두산퓨얼셀", "중저온(600°C) SOFC 양산 | 61.7% 발전효율 8kW SOFC", "KGS 인증", "2025"],
            ],
            Some(widths_in(&[2.0, 5.0, 2.8, 2.3])),
            14.0,
            12.0,
        ))
        .block(text_at(
            Rect::from_inches(0.8, 5.8, 11.7, 0.8),
            vec![
                line(
                    "특허: 수전해 기술 — 중국 30% > 독일 20% > 일본 18% > 미국 11% > 한국 10% (5위)",
                    14.0,
                    false,
                    ColorToken::Muted,
                ),
                line("한국 PCT 국제특허출원 세계 4위 (5년 연속)", 14.0, false, ColorToken::Muted),
            ],
        ))
}

fn korea_infra() -> SlideSpec {
    SlideSpec::content("[한국] 수소 인프라 현황")
        .block(chip_block(
            Rect::from_inches(0.6, 1.5, 5.8, 0.7),
            ColorToken::Primary,
            "수소충전소 현황",
            18.0,
        ))
        .block(table_block(
            Rect::from_inches(0.6, 2.3, 5.8, 2.5),
            &["구분", "현황/목표"],
            &[
                &["2025.3 운영 중", "407기"],
                &["2027년 목표", "550기"],
                &["2030년 목표", "660기"],
                &["2040년 목표", "1,200기"],
            ],
            Some(widths_in(&[3.0, 2.8])),
            14.0,
            13.0,
        ))
        .block(chip_block(
            Rect::from_inches(6.8, 1.5, 5.9, 0.7),
            ColorToken::Primary,
            "수소 생산 현황",
            18.0,
        ))
        .block(text_at(
            Rect::from_inches(7.0, 2.4, 5.5, 2.5),
            vec![
                line("전체 수소 생산의 90%+ = 그레이수소", 16.0, true, ColorToken::AccentRed),
                sub("천연가스 개질: 수소 1톤 → CO2 10톤", 14.0),
                line("그린수소 가격: 5,200~6,500원/kg", 16.0, true, ColorToken::Text),
                sub("한화솔루션: 평창 연 290톤 생산", 14.0),
                sub("수전해 기지: 전북 부안, 강원 평창", 14.0),
            ],
        ))
        .block(chip_block(
            Rect::from_inches(0.6, 5.2, 12.1, 0.7),
            ColorToken::PrimarySoft,
            "수소 공급 목표: 2030년 390만톤 → 2040년 526만톤 → 2050년 2,790만톤",
            16.0,
        ))
        .block(text_at(
            Rect::from_inches(0.8, 6.1, 11.7, 0.7),
            vec![line(
                "저장·운송: 효성-린데 세계최대 액화수소 플랜트 | K-조선 액화수소 운반선 개발 | 탄소섬유 수소탱크",
                14.0,
                false,
                ColorToken::Muted,
            )],
        ))
}

fn korea_swot() -> SlideSpec {
    SlideSpec::content("[한국] 연료전지 분야 강점과 약점")
        .block(chip_block(
            Rect::from_inches(0.6, 1.5, 5.8, 0.7),
            ColorToken::Accent,
            "강점 (Strengths)",
            20.0,
        ))
        .block(text_at(
            Rect::from_inches(0.6, 2.3, 5.8, 4.2),
            indented(
                &[
                    "발전용 연료전지 세계 1위 (1GW+)",
                    "넥쏘 수소차 세계 1위 (42.9%), 4만대+",
                    "세계 최초 수소법 + 청정수소 입찰시장",
                    "5대 그룹 43.4조원 대규모 투자",
                    "KAIST 등 세계적 R&D (Nature 게재)",
                    "생산-저장-운송-활용 통합 밸류체인",
                    "XCIENT 유럽 165대, 2,000만km 돌파",
                    "수소버스 2024년 1,000대+ 신규 보급",
                ],
                14.0,
                4.0,
            ),
        ))
        .block(chip_block(
            Rect::from_inches(6.8, 1.5, 5.9, 0.7),
            ColorToken::AccentRed,
            "약점 (Weaknesses)",
            20.0,
        ))
        .block(text_at(
            Rect::from_inches(6.8, 2.3, 5.9, 4.2),
            indented(
                &[
                    "전해질막(80%+), 촉매(85%+) 수입 의존",
                    "CHPS 2024 낙찰 11.5%, 2025 입찰 취소",
                    "수소 생산의 90%+가 그레이수소",
                    "충전소 대부분 적자(HyNet 4년 166억 손실)",
                    "수소가격 10,239원/kg, 경제성 부족",
                    "수전해·수소액화 선도국 대비 5~7년 격차",
                    "중국 추격 가속(특허 69%, 부품국산화 70%)",
                    "로드맵 달성률: 수소차 23%, 발전 13.5%",
                ],
                14.0,
                4.0,
            ),
        ))
}

fn roadmap_achievement() -> SlideSpec {
    SlideSpec::content("[한국] 수소경제 로드맵 달성률 분석")
        .block(text_at(
            Rect::from_inches(0.8, 1.4, 11.7, 0.6),
            vec![line(
                "2019년 로드맵 목표 대비 2025년 현재 실제 달성 현황 — 분야별 상당한 편차 존재",
                16.0,
                true,
                ColorToken::Primary,
            )],
        ))
        .block(table_block(
            Rect::from_inches(0.6, 2.1, 12.1, 3.8),
            &["분야", "2022년 목표", "실제 달성", "달성률", "2030년 목표 대비 현황"],
            &[
                &["수소차 보급", "8.1만 대", "~1.9만 대", "23%", "18만 대 목표 → 현재 3.8만 대"],
                &["수소충전소", "310개소", "~170개소(→407기)", "55%→74%", "660기 목표 → 양호한 진척"],
                &["발전용 연료전지", "1.5GW", "~1.0GW", "67%", "8GW 목표 → 1.08GW (13.5%)"],
                &["건물용 연료전지", "50MW", "~13MW", "26%", "에네팜 49만대 대비 현저히 부족"],
                &["수소 공급량", "47만 톤", "~22만 톤", "47%", "390만 톤 목표 → 그린 전환 시급"],
                &["수소버스", "-", "2,066대", "-", "2024년 1,000대+ (277% 급증)"],
            ],
            Some(widths_in(&[2.2, 2.2, 2.2, 1.5, 4.0])),
            14.0,
            12.0,
        ))
        .block(chip_block(
            Rect::from_inches(0.6, 6.1, 3.8, 0.7),
            ColorToken::Accent,
            "양호: 충전소, 수소버스",
            14.0,
        ))
        .block(chip_block(
            Rect::from_inches(4.6, 6.1, 3.8, 0.7),
            ColorToken::AccentOrange,
            "보통: 발전용, 수소공급",
            14.0,
        ))
        .block(chip_block(
            Rect::from_inches(8.6, 6.1, 4.1, 0.7),
            ColorToken::AccentRed,
            "저조: 수소차(23%), 건물용(26%)",
            14.0,
        ))
}

fn parts_techgap() -> SlideSpec {
    SlideSpec::content("[한국] 핵심부품 국산화율 및 기술격차 분석")
        .block(chip_block(
            Rect::from_inches(0.5, 1.4, 6.2, 0.6),
            ColorToken::Primary,
            "PEMFC 핵심부품 국산화 현황",
            16.0,
        ))
        .block(table_block(
            Rect::from_inches(0.5, 2.1, 6.2, 3.3),
            &["핵심부품", "국산화율", "해외 의존 / 국내 기업"],
            &[
                &["전해질막 (PEM)", "10~20%", "Chemours(Nafion) / 코오롱"],
                &["촉매 (Pt/C)", "10~15%", "JM, Umicore / 연구단계"],
                &["MEA (막전극접합체)", "20~30%", "Gore, 3M / FCMT, 코오롱"],
                &["GDL (가스확산층)", "50~60%", "SGL, Toray / 제이앤티지"],
                &["분리판 (금속)", "60~70%", "국내 강점 / 케이퓨얼셀"],
            ],
            Some(widths_in(&[2.0, 1.5, 2.7])),
            14.0,
            11.0,
        ))
        .block(chip_block(
            Rect::from_inches(7.0, 1.4, 5.7, 0.6),
            ColorToken::AccentRed,
            "선도국 대비 기술격차 (NIGT 평가)",
            16.0,
        ))
        .block(table_block(
            Rect::from_inches(7.0, 2.1, 5.7, 3.3),
            &["기술 분야", "격차", "선도국"],
            &[
                &["PEMFC 스택", "1~3년", "일본(도요타)"],
                &["SOFC 발전용", "3~5년", "미국(Bloom)"],
                &["수전해 (PEM)", "3~5년", "독일, 미국"],
                &["전해질막", "5~7년", "미국(Chemours)"],
                &["촉매", "5~7년", "영국(JM)"],
                &["수소터빈", "10년+", "미국(GE)"],
            ],
            Some(widths_in(&[2.2, 1.3, 2.2])),
            14.0,
            11.0,
        ))
        .block(text_at(
            Rect::from_inches(0.8, 5.6, 11.7, 1.2),
            vec![
                line(
                    "중국 추격 경고: 연료전지 특허 글로벌 69% 장악 | 부품 국산화 70% (한국 20~30%)",
                    15.0,
                    true,
                    ColorToken::AccentRed,
                ),
                line(
                    "SynStack GIII 4.5+ kW/L (현대 2.5세대 ~3.5 kW/L) | 비용 연간 33% 하락 추세",
                    14.0,
                    false,
                    ColorToken::Text,
                ),
            ],
        ))
}

fn charging_crisis() -> SlideSpec {
    SlideSpec::content("[한국] 수소충전소 수익성 위기 분석")
        .block(chip_block(
            Rect::from_inches(0.5, 1.4, 6.2, 0.6),
            ColorToken::AccentRed,
            "충전소 수익성 현황 — 구조적 적자",
            16.0,
        ))
        .block(table_block(
            Rect::from_inches(0.5, 2.1, 6.2, 3.5),
            &["항목", "현황"],
            &[
                &["충전소 1기 설치비", "30~50억 원"],
                &["가동률", "20~25% (손익분기 미달)"],
                &["하루 평균 충전", "4대에 불과"],
                &["흑자 충전소 수", "전국 약 7곳"],
                &["수소 판매가 (2025.7)", "10,239원/kg"],
                &["정부 지원 (152곳)", "연 82억원 (충전소당 5,400만원)"],
            ],
            Some(widths_in(&[3.2, 3.0])),
            14.0,
            12.0,
        ))
        .block(chip_block(
            Rect::from_inches(7.0, 1.4, 5.7, 0.6),
            ColorToken::Primary,
            "HyNet(한국수소충전소) 적자 추이",
            16.0,
        ))
        .block(table_block(
            Rect::from_inches(7.0, 2.1, 5.7, 3.0),
            &["연도", "적자액"],
            &[
                &["2019년", "11억 4,000만 원"],
                &["2020년", "22억 5,800만 원"],
                &["2021년", "58억 8,200만 원"],
                &["2022년", "84억 5,000만 원"],
                &["4년 누적", "166억 원 (639% 급증)"],
            ],
            Some(widths_in(&[2.5, 3.2])),
            14.0,
            12.0,
        ))
        .block(text_at(
            Rect::from_inches(0.8, 5.8, 11.7, 1.2),
            vec![
                line(
                    "적자 원인: 수소차 4만대 대비 407기 충전소 → 충전소당 100대, 일 4대 충전",
                    14.0,
                    true,
                    ColorToken::Text,
                ),
                line(
                    "수소 가격: 8,000원(2021) → 9,000원(2023, 러-우전쟁) → 10,000원+(2024) — 경유보다 비쌈",
                    14.0,
                    false,
                    ColorToken::AccentRed,
                ),
            ],
        ))
}

fn tech_innovation() -> SlideSpec {
    SlideSpec::content("최근 기술 혁신 및 비용 절감 트렌드")
        .block(text_at(
            Rect::from_inches(0.8, 1.5, 11.7, 2.0),
            vec![
                heading("촉매 기술 혁신 — 백금 의존도 탈피", 18.0),
                sub("1990년대 대비 kW당 백금 사용량 90% 감소 | DOE 목표: 0.10 g/kW 미만", 15.0),
                sub(
                    "PGM-free 촉매: Fe-N-C 0.85 W/cm² | 코발트 기반 4배 내구성 | Fe-Cu 302 mW/cm²",
                    15.0,
                ),
                sub("워싱턴대 (2026.2): CVD 기법으로 철 촉매 내구성 획기적 개선", 15.0),
            ],
        ))
        .block(table_block(
            Rect::from_inches(0.6, 3.8, 8.5, 2.8),
            &["항목", "현재 수준", "목표"],
            &[
                &["수소 생산 비용", "$4~6/kg", "$1/kg (2031)"],
                &["연료전지 시스템 (수송용)", "$80~100/kW", "$80/kW (2030)"],
                &["전해조 시스템", "~$400/kW", "$250/kW (2026)"],
                &["백금 촉매 비용", "$6.80/kW", "$4.18/kW"],
            ],
            Some(widths_in(&[3.5, 2.5, 2.5])),
            14.0,
            14.0,
        ))
        .block(panel_block(
            Rect::from_inches(9.5, 3.8, 3.2, 2.8),
            ColorToken::Primary,
            "AI 데이터센터\n전력 혁명\n\n2030년까지\nDC 38%가\n온사이트 발전\n\nSOFC가\n그리드 우회 솔루션",
            14.0,
        ))
}

fn korea_global() -> SlideSpec {
    SlideSpec::content("[한국] 글로벌 시장에서의 위상")
        .block(table_block(
            Rect::from_inches(0.6, 1.5, 12.1, 4.2),
            &["분야", "한국의 위상", "비고"],
            &[
                &["발전용 연료전지 설치량", "세계 1위", "1,036MW (1GW 돌파)"],
                &["수소전기차 판매", "세계 1위 (현대차)", "글로벌 점유율 42.9%"],
                &["수소차 보유 대수", "세계 2위", "누적 4만대 (중국 다음)"],
                &["수소법 제정", "세계 최초", "2020년 시행"],
                &["청정수소발전 입찰시장", "세계 최초", "2024년 개설"],
                &["수전해 특허", "세계 5위", "전체의 10%"],
                &["수소충전소 수", "세계 3~4위권", "407기 (2025.3)"],
            ],
            Some(widths_in(&[3.5, 3.0, 5.6])),
            14.0,
            13.0,
        ))
        .block(text_at(
            Rect::from_inches(0.8, 6.0, 11.7, 0.8),
            vec![line(
                "수소차 + 발전용 연료전지 양 축에서 세계 선두 | 단, 수전해·저장·운송·핵심소재는 선도국 대비 7년+ 격차",
                15.0,
                true,
                ColorToken::Primary,
            )],
        ))
}

fn conclusion() -> SlideSpec {
    SlideSpec::closing(ClosingContent {
        title: "결론 및 향후 전망".to_string(),
        messages: vec![
            ClosingMessage::new(
                "1",
                "글로벌 고성장 지속",
                &[
                    "연평균 20~27% 성장, 2030년 수백억 달러 규모",
                    "AI 데이터센터: SOFC 대규모 배치가 게임체인저",
                ],
            ),
            ClosingMessage::new(
                "2",
                "상용차 확대",
                &["수소 트럭·버스 보급 가속화, PEMFC 수요 견인"],
            ),
            ClosingMessage::new(
                "3",
                "한국의 기회와 과제",
                &[
                    "2040년 연 43조원 부가가치, 42만개 일자리 창출",
                    "5대 과제: 소재·부품 국산화 | 그린수소 전환 | 정책 안정성 | 인프라 확충 | 기술 격차 해소",
                ],
            ),
        ],
        thanks: "감사합니다  |  Thank You".to_string(),
    })
}

/// The full 25-slide deck.
pub fn deck() -> Deck {
    let mut deck = Deck::new("fuelcell", "연료전지_발표자료.pptx", Theme::business());
    for spec in [
        cover(),
        toc(),
        global_market(),
        fc_types(),
        applications(),
        global_policy(),
        us_policy(),
        us_companies(),
        us_applications(),
        china_market(),
        china_companies(),
        china_applications(),
        us_vs_china(),
        korea_market(),
        korea_policy(),
        korea_companies(),
        korea_rd(),
        korea_infra(),
        korea_swot(),
        roadmap_achievement(),
        parts_techgap(),
        charging_crisis(),
        tech_innovation(),
        korea_global(),
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
        assert_eq!(prs.slide_count(), 25);
    }

    #[test]
    fn test_toc_has_five_parts() {
        // each part contributes a chip and a text block
        assert_eq!(toc().blocks.len(), 10);
    }

    #[test]
    fn test_swot_lists_are_balanced() {
        let spec = korea_swot();
        assert_eq!(spec.blocks.len(), 4);
        for block in &spec.blocks {
            if let Block::Text { paras, .. } = block {
                assert_eq!(paras.len(), 8);
            }
        }
    }
}
