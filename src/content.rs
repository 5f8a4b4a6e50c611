//! Company copy rendered by the pages. Fixed at compile time.

pub struct Company {
    pub name: &'static str,
    pub tagline: &'static str,
    pub mission: &'static str,
    pub founded: &'static str,
    pub location: &'static str,
    pub business_hours: &'static str,
    pub email: &'static str,
    pub recruit_url: &'static str,
}

pub const COMPANY: Company = Company {
    name: "合同会社TOONIQ",
    tagline: "The future of Anime, today.",
    mission: "AIで「作業」から「人」を解放し、人間にしかできない「感動」を生み出すために、アニメ制作の構造を根本から変える",
    founded: "2025年",
    location: "東京都",
    business_hours: "平日 10:00 - 18:00",
    email: "contact@tooniq.co.jp",
    recruit_url: "https://tooniq.co.jp/recruit",
};

/// Rotating hero copy on the home page.
pub const HERO_PHRASES: &[&str] = &[
    "AIで作業から人を解放",
    "人間にしかできない感動を",
    "アニメ制作の未来を創る",
    "技術で限界を超える",
];

pub struct Leader {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

pub const LEADERSHIP: &[Leader] = &[
    Leader {
        name: "大木天翔",
        role: "CEO/COO",
        bio: "東京理科大学理学部第一部物理学科在学。理化学研究所で量子技術研究、東京大学松尾・岩澤研究室でインターンシップ従事",
    },
    Leader {
        name: "山口優斗",
        role: "CTO/AIエンジニア",
        bio: "東京理科大学",
    },
];

pub struct Milestone {
    pub year: &'static str,
    pub description: &'static str,
}

pub const HISTORY: &[Milestone] = &[Milestone {
    year: "2025年",
    description: "東京理科大学の公認サークル「動画研究同好会」で技術面の開発を行っていた2名が起業",
}];

pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "全国大学アニメ制作コラボレーション",
        description: "全国10の大学アニメ制作サークルが集まり、プロの作画監督指導のもと一つのアニメ作品を制作。制作進行や進行管理・Webサイト構築などの技術支援を実施",
        category: "制作支援",
    },
    Achievement {
        title: "学園祭企画支援",
        description: "大学の学園祭で現代のテレビアニメを昔のアニメ制作の手法で再現する企画を実施。サークルと他企業との間で企画の進行やNDAなどの契約、発注などを担当",
        category: "企画運営",
    },
];

pub struct Problem {
    pub title: &'static str,
    pub icon: &'static str,
}

pub const INDUSTRY_PROBLEMS: &[Problem] = &[
    Problem {
        title: "人材不足と後進育成不足",
        icon: "users",
    },
    Problem {
        title: "作品過多による制作リソースの奪い合い",
        icon: "chart",
    },
    Problem {
        title: "クオリティ問題と作画崩壊",
        icon: "alert",
    },
    Problem {
        title: "制作管理ツールの「車輪の再発明」",
        icon: "refresh",
    },
    Problem {
        title: "デジタルアセットの非互換性",
        icon: "puzzle",
    },
    Problem {
        title: "技術・ノウハウの非共有と属人化",
        icon: "lock",
    },
];

pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub icon: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: "animatime",
        name: "AnimaTime",
        subtitle: "クラウド制作進行ソフト",
        description: "スプシやエクセルに代わる直感的なUIでアニメ特化のオールインワンSaaS",
        features: &[
            "スケジュールの自動最適化",
            "制作進行のコネによらない人材管理",
            "一斉メール機能",
            "進捗データの集約",
        ],
        icon: "calendar",
    },
    Service {
        id: "consulting",
        name: "技術コンサルタント・顧問",
        subtitle: "最新技術の導入支援",
        description: "最新技術のヒアリングと適切なソフト・使い方の提案",
        features: &[
            "最新技術のヒアリングと適切なソフト・使い方の提案",
            "設定や使い方講習の開催",
            "顧問制度では導入前からのトラブル対応も実施",
        ],
        icon: "lightbulb",
    },
    Service {
        id: "chatbot",
        name: "ChatBot作成",
        subtitle: "社内ナレッジの活用",
        description: "NDAを結び、会社の文章や新人用オンボーディング資料を学習",
        features: &[
            "NDAを結び、会社の文章や新人用オンボーディング資料を学習",
            "独自開発のためChatGPTのように学習に使用されることはなし",
            "細かなことはChatBotに聞けば教えてくれる",
        ],
        icon: "chat",
    },
    Service {
        id: "minutes",
        name: "議事録ツール",
        subtitle: "会議の自動記録と要約",
        description: "オンライン会議にBotが同席して音声で録音",
        features: &[
            "オンライン会議にBotが同席して音声で録音",
            "自動で書き起こしをして要約、TODOをまとめる",
            "アニメ業界特化にfinetuning、会社特化のRAG",
            "AnimaTimeとの連携",
        ],
        icon: "document",
    },
    Service {
        id: "custom",
        name: "カスタム開発",
        subtitle: "オーダーメイドシステム開発",
        description: "既存のシステムと上手く合う形で新システムを開発",
        features: &[
            "既存のシステムと上手く合う形で新システムを開発",
            "ソフトウェアのプラグイン開発も対応",
        ],
        icon: "code",
    },
    Service {
        id: "website",
        name: "Webサイト作成・運用代行",
        subtitle: "Web制作とマーケティング",
        description: "会社のHPや作品ごとの特設ページの作成・管理",
        features: &[
            "会社のHPや作品ごとの特設ページの作成・管理",
            "アクセス解析レポートを月一ペースで報告",
        ],
        icon: "globe",
    },
];

pub struct Vision {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FUTURE_VISION: &[Vision] = &[
    Vision {
        title: "独自AIモデルの開発",
        description: "制作会社と提携して独自のAIモデルの作成（自動中割りや仕上げ、背景や3D素材の生成など）",
    },
    Vision {
        title: "アニメスタジオの設立",
        description: "自社でアニメスタジオを持ち、IPを所有",
    },
    Vision {
        title: "学習データの構築",
        description: "質の高いアニメの学習データを作成",
    },
];

pub struct Work {
    pub title: &'static str,
    pub category: &'static str,
    pub period: &'static str,
    pub client: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub results: &'static [&'static str],
}

pub const WORKS: &[Work] = &[
    Work {
        title: "全国大学アニメ制作連携プロジェクト",
        category: "プロジェクト管理",
        period: "2025年",
        client: "全国10大学アニメ制作サークル",
        description: "全国10の大学アニメ制作サークルが集まり、プロの作画監督指導のもと一つのアニメ作品を制作",
        highlights: &[
            "制作進行システムの構築と運用",
            "進行管理の効率化により納期を2週間短縮",
            "Webサイト構築による情報共有の円滑化",
            "10大学間のコミュニケーション基盤確立",
        ],
        technologies: &["AnimaTime", "Web開発", "プロジェクト管理"],
        results: &["200名以上", "予定より2週間早く完成", "参加者満足度95%"],
    },
    Work {
        title: "レトロアニメ制作企画",
        category: "企画・技術支援",
        period: "2025年",
        client: "大学学園祭実行委員会",
        description: "現代のテレビアニメを昔のアニメ制作の手法で再現する企画を実施",
        highlights: &[
            "サークルと他企業との間で企画進行を担当",
            "NDA等の契約書作成と交渉",
            "制作工程の技術的アドバイス",
            "発注管理と予算調整",
        ],
        technologies: &["契約管理", "企画進行", "技術コンサルティング"],
        results: &["5,000名以上が来場", "複数メディアで紹介", "3社との協業実現"],
    },
    Work {
        title: "制作管理システム開発",
        category: "システム開発",
        period: "2025年〜",
        client: "複数のアニメ制作会社",
        description: "各社の既存システムと連携する制作管理システムのカスタム開発",
        highlights: &[
            "既存Excel運用から脱却",
            "クラウド化による在宅勤務対応",
            "リアルタイム進捗共有の実現",
            "自動レポート生成機能の実装",
        ],
        technologies: &["クラウド開発", "API連携", "データ分析"],
        results: &["作業効率40%向上", "ヒューマンエラー80%削減", "レポート作成時間90%削減"],
    },
];

pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat {
        label: "プロジェクト完了",
        value: "15+",
    },
    Stat {
        label: "協力企業・団体",
        value: "20+",
    },
    Stat {
        label: "参加クリエイター",
        value: "500+",
    },
    Stat {
        label: "効率化達成率",
        value: "40%",
    },
];

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: &[Faq] = &[
    Faq {
        question: "見積もりは無料ですか？",
        answer: "はい、お見積もりは無料です。お気軽にご相談ください。",
    },
    Faq {
        question: "AnimaTimeの導入期間はどのくらいですか？",
        answer: "規模にもよりますが、通常1〜2週間程度で導入可能です。",
    },
    Faq {
        question: "リモートでのサポートは可能ですか？",
        answer: "はい、オンラインでのサポートも対応しております。",
    },
    Faq {
        question: "小規模な制作会社でも導入できますか？",
        answer: "規模に関わらず導入可能です。お客様に合わせたプランをご提案します。",
    },
];

pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub external: bool,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        href: "/",
        label: "ホーム",
        external: false,
    },
    NavItem {
        href: "/about",
        label: "会社概要",
        external: false,
    },
    NavItem {
        href: "/services",
        label: "サービス",
        external: false,
    },
    NavItem {
        href: "/works",
        label: "実績",
        external: false,
    },
    NavItem {
        href: "https://tooniq.co.jp/recruit",
        label: "採用情報",
        external: true,
    },
    NavItem {
        href: "/contact",
        label: "お問い合わせ",
        external: false,
    },
];
