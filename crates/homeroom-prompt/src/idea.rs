use serde::{Deserialize, Serialize};

/// The idea catalog students pick their first pitch from, with a free-form
/// escape hatch for everything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdeaKind {
    Craft,
    Snack,
    Stationery,
    Games,
    EcoLiving,
    Digital,
    Custom(String),
}

impl IdeaKind {
    /// Options in picker order; `Custom` is offered last as 기타.
    pub const PRESETS: [IdeaKind; 6] = [
        IdeaKind::Craft,
        IdeaKind::Snack,
        IdeaKind::Stationery,
        IdeaKind::Games,
        IdeaKind::EcoLiving,
        IdeaKind::Digital,
    ];

    /// Full picker label with examples.
    pub fn label(&self) -> String {
        match self {
            IdeaKind::Craft => "🎨 만들기/공예 관련 (예: 손수건, 열쇠고리, 스티커 등)".to_string(),
            IdeaKind::Snack => "🍪 음식/간식 관련 (예: 쿠키, 젤리, 음료 등)".to_string(),
            IdeaKind::Stationery => {
                "📚 학습 도구/문구 관련 (예: 노트, 필기구, 스티커북 등)".to_string()
            }
            IdeaKind::Games => "🎮 게임/놀이 관련 (예: 보드게임, 퍼즐, 장난감 등)".to_string(),
            IdeaKind::EcoLiving => {
                "🌱 환경/생활 개선 관련 (예: 재활용품, 생활용품 등)".to_string()
            }
            IdeaKind::Digital => {
                "💻 디지털/기술 관련 (예: 앱, 웹사이트, 프로그램 등)".to_string()
            }
            IdeaKind::Custom(text) => format!("기타: {text}"),
        }
    }

    /// Short keyword without emoji or examples, interpolated into the
    /// opening turn.
    pub fn keyword(&self) -> &str {
        match self {
            IdeaKind::Craft => "만들기/공예",
            IdeaKind::Snack => "음식/간식",
            IdeaKind::Stationery => "학습 도구/문구",
            IdeaKind::Games => "게임/놀이",
            IdeaKind::EcoLiving => "환경/생활 개선",
            IdeaKind::Digital => "디지털/기술",
            IdeaKind::Custom(text) => text,
        }
    }

    /// The fixed first user turn announcing the chosen idea area.
    pub fn opening_message(&self) -> String {
        format!("저는 {} 관련 아이디어를 생각해보고 싶어요.", self.keyword())
    }
}
