//! Static deck data: 22 major arcana followed by 14 cards of each suit.

use crate::cards::{Arcana, Card, Suit};

macro_rules! major {
    ($num:literal, $id:literal, $name:literal, $up:literal, $rev:literal, [$($kw:literal),+ $(,)?]) => {
        Card {
            id: $id,
            name: $name,
            arcana: Arcana::Major,
            suit: None,
            number: $num,
            image_url: concat!("/cards/", $id, ".jpg"),
            meaning_upright: $up,
            meaning_reversed: $rev,
            keywords: &[$($kw),+],
        }
    };
}

macro_rules! minor {
    ($suit:ident, $num:literal, $id:literal, $name:literal, $up:literal, $rev:literal, [$($kw:literal),+ $(,)?]) => {
        Card {
            id: $id,
            name: $name,
            arcana: Arcana::Minor,
            suit: Some(Suit::$suit),
            number: $num,
            image_url: concat!("/cards/", $id, ".jpg"),
            meaning_upright: $up,
            meaning_reversed: $rev,
            keywords: &[$($kw),+],
        }
    };
}

pub(crate) static CARDS: [Card; 78] = [
    // Major arcana
    major!(0, "major-00", "바보 (The Fool)",
        "새로운 시작과 순수한 모험심을 뜻합니다. 두려움 없이 첫걸음을 내딛을 때입니다.",
        "무모함과 준비 부족을 경고합니다. 충동적인 결정이 위험을 부를 수 있습니다.",
        ["새로운 시작", "자유", "모험", "순수함"]),
    major!(1, "major-01", "마법사 (The Magician)",
        "의지와 능력으로 원하는 것을 현실로 만드는 힘을 뜻합니다.",
        "재능을 제대로 쓰지 못하거나 속임수에 휘말릴 수 있음을 뜻합니다.",
        ["의지", "창조력", "기술", "집중"]),
    major!(2, "major-02", "여사제 (The High Priestess)",
        "직관과 내면의 지혜에 귀 기울일 때입니다. 숨겨진 진실이 드러납니다.",
        "직관을 무시하거나 감정을 억누르고 있음을 뜻합니다.",
        ["직관", "신비", "지혜", "침묵"]),
    major!(3, "major-03", "여황제 (The Empress)",
        "풍요와 돌봄, 창조적인 에너지가 넘치는 시기입니다.",
        "의존이나 과보호, 창조성의 정체를 뜻합니다.",
        ["풍요", "모성", "창조", "자연"]),
    major!(4, "major-04", "황제 (The Emperor)",
        "질서와 안정, 책임감 있는 리더십을 뜻합니다.",
        "지나친 통제나 권위주의, 경직된 태도를 경고합니다.",
        ["권위", "안정", "구조", "리더십"]),
    major!(5, "major-05", "교황 (The Hierophant)",
        "전통과 신념, 믿을 만한 조언자의 가르침을 뜻합니다.",
        "관습에 대한 반발이나 맹목적인 순응을 뜻합니다.",
        ["전통", "가르침", "신념", "조언"]),
    major!(6, "major-06", "연인 (The Lovers)",
        "조화로운 관계와 마음에서 우러난 선택을 뜻합니다.",
        "관계의 불균형이나 가치관의 충돌, 망설임을 뜻합니다.",
        ["사랑", "선택", "조화", "결합"]),
    major!(7, "major-07", "전차 (The Chariot)",
        "강한 의지로 장애물을 넘어 앞으로 나아가는 승리를 뜻합니다.",
        "방향을 잃거나 통제력이 흔들리는 상태를 뜻합니다.",
        ["승리", "의지", "전진", "통제"]),
    major!(8, "major-08", "힘 (Strength)",
        "부드러운 인내와 내면의 용기로 어려움을 다스리는 힘입니다.",
        "자신감 부족이나 감정에 휘둘리는 상태를 뜻합니다.",
        ["용기", "인내", "자제", "내면의 힘"]),
    major!(9, "major-09", "은둔자 (The Hermit)",
        "홀로 성찰하며 내면의 답을 찾는 시간을 뜻합니다.",
        "지나친 고립이나 외로움, 성찰의 회피를 뜻합니다.",
        ["성찰", "고독", "탐구", "지혜"]),
    major!(10, "major-10", "운명의 수레바퀴 (Wheel of Fortune)",
        "흐름이 바뀌는 전환점과 찾아오는 기회를 뜻합니다.",
        "뜻대로 되지 않는 흐름이나 반복되는 불운을 뜻합니다.",
        ["운명", "전환점", "순환", "기회"]),
    major!(11, "major-11", "정의 (Justice)",
        "공정한 판단과 원인에 따른 결과를 뜻합니다.",
        "불공정함이나 책임 회피, 편향된 판단을 뜻합니다.",
        ["공정", "균형", "진실", "책임"]),
    major!(12, "major-12", "매달린 사람 (The Hanged Man)",
        "잠시 멈추어 다른 관점에서 상황을 바라볼 때입니다.",
        "불필요한 희생이나 정체, 결정의 지연을 뜻합니다.",
        ["멈춤", "관점 전환", "희생", "수용"]),
    major!(13, "major-13", "죽음 (Death)",
        "한 단계가 끝나고 새로운 변화가 시작됨을 뜻합니다.",
        "변화에 대한 저항이나 놓지 못하는 집착을 뜻합니다.",
        ["끝", "변화", "전환", "재탄생"]),
    major!(14, "major-14", "절제 (Temperance)",
        "균형과 조화, 서두르지 않는 인내를 뜻합니다.",
        "불균형과 과잉, 조급함을 경고합니다.",
        ["균형", "절제", "조화", "치유"]),
    major!(15, "major-15", "악마 (The Devil)",
        "집착과 유혹, 스스로를 묶는 습관을 뜻합니다.",
        "속박에서 벗어나려는 움직임과 해방을 뜻합니다.",
        ["집착", "유혹", "속박", "욕망"]),
    major!(16, "major-16", "탑 (The Tower)",
        "예상치 못한 격변과 기존 질서의 붕괴를 뜻합니다.",
        "변화를 피하려 하거나 위기를 가까스로 넘기는 상황입니다.",
        ["격변", "붕괴", "깨달음", "해방"]),
    major!(17, "major-17", "별 (The Star)",
        "희망과 치유, 미래에 대한 믿음을 뜻합니다.",
        "희망을 잃거나 자신감이 떨어진 상태를 뜻합니다.",
        ["희망", "치유", "영감", "평온"]),
    major!(18, "major-18", "달 (The Moon)",
        "불안과 혼란, 드러나지 않은 진실을 뜻합니다.",
        "혼란이 걷히고 진실이 서서히 드러남을 뜻합니다.",
        ["불안", "환상", "직관", "무의식"]),
    major!(19, "major-19", "태양 (The Sun)",
        "성공과 기쁨, 밝은 에너지가 가득한 시기입니다.",
        "일시적인 좌절이나 지나친 낙관을 뜻합니다.",
        ["성공", "기쁨", "활력", "긍정"]),
    major!(20, "major-20", "심판 (Judgement)",
        "과거를 돌아보고 새롭게 깨어나는 부름을 뜻합니다.",
        "자기 의심이나 과거에 대한 후회를 뜻합니다.",
        ["부활", "각성", "결단", "용서"]),
    major!(21, "major-21", "세계 (The World)",
        "한 여정의 완성과 성취, 통합을 뜻합니다.",
        "마무리되지 않은 일이나 완성의 지연을 뜻합니다.",
        ["완성", "성취", "통합", "여행"]),

    // Wands
    minor!(Wands, 1, "wands-01", "완드 에이스 (Ace of Wands)",
        "새로운 열정과 창조적 영감이 시작됨을 뜻합니다.",
        "의욕 저하나 시작의 지연을 뜻합니다.",
        ["영감", "열정", "시작"]),
    minor!(Wands, 2, "wands-02", "완드 2 (Two of Wands)",
        "미래를 계획하고 더 넓은 세상을 바라보는 시기입니다.",
        "계획 부족이나 변화에 대한 두려움을 뜻합니다.",
        ["계획", "결정", "전망"]),
    minor!(Wands, 3, "wands-03", "완드 3 (Three of Wands)",
        "노력의 첫 결실과 확장의 기회를 뜻합니다.",
        "기대에 못 미치는 결과나 지연을 뜻합니다.",
        ["확장", "전망", "진전"]),
    minor!(Wands, 4, "wands-04", "완드 4 (Four of Wands)",
        "안정과 축하, 함께 기뻐할 일이 생김을 뜻합니다.",
        "불안정한 기반이나 어긋난 축하를 뜻합니다.",
        ["축하", "안정", "화합"]),
    minor!(Wands, 5, "wands-05", "완드 5 (Five of Wands)",
        "경쟁과 의견 충돌, 작은 다툼을 뜻합니다.",
        "갈등을 피하거나 해소하려는 움직임을 뜻합니다.",
        ["경쟁", "갈등", "도전"]),
    minor!(Wands, 6, "wands-06", "완드 6 (Six of Wands)",
        "승리와 인정, 노력에 대한 보상을 뜻합니다.",
        "인정받지 못하는 서운함이나 자만을 뜻합니다.",
        ["승리", "인정", "자신감"]),
    minor!(Wands, 7, "wands-07", "완드 7 (Seven of Wands)",
        "자신의 입장을 지키며 버티는 용기를 뜻합니다.",
        "압박에 지치거나 방어를 포기하는 상태입니다.",
        ["방어", "신념", "끈기"]),
    minor!(Wands, 8, "wands-08", "완드 8 (Eight of Wands)",
        "빠른 진행과 소식, 일이 급물살을 탐을 뜻합니다.",
        "지연이나 성급함으로 인한 혼선을 뜻합니다.",
        ["속도", "소식", "진행"]),
    minor!(Wands, 9, "wands-09", "완드 9 (Nine of Wands)",
        "지쳤지만 끝까지 버티는 회복력을 뜻합니다.",
        "극심한 피로나 방어적인 태도를 뜻합니다.",
        ["회복력", "경계", "인내"]),
    minor!(Wands, 10, "wands-10", "완드 10 (Ten of Wands)",
        "무거운 책임과 과중한 부담을 뜻합니다.",
        "짐을 내려놓거나 나누어야 할 때를 뜻합니다.",
        ["부담", "책임", "과로"]),
    minor!(Wands, 11, "wands-11", "완드 페이지 (Page of Wands)",
        "호기심과 새로운 도전에 대한 설렘을 뜻합니다.",
        "산만함이나 실행력 부족을 뜻합니다.",
        ["호기심", "탐험", "소식"]),
    minor!(Wands, 12, "wands-12", "완드 나이트 (Knight of Wands)",
        "열정적인 추진력과 과감한 행동을 뜻합니다.",
        "성급함이나 무모한 돌진을 경고합니다.",
        ["추진력", "모험", "열정"]),
    minor!(Wands, 13, "wands-13", "완드 퀸 (Queen of Wands)",
        "자신감과 따뜻한 카리스마를 뜻합니다.",
        "질투나 자신감 부족, 예민함을 뜻합니다.",
        ["자신감", "매력", "독립"]),
    minor!(Wands, 14, "wands-14", "완드 킹 (King of Wands)",
        "비전을 가진 리더십과 대담한 결단을 뜻합니다.",
        "독단이나 지나친 기대, 조급함을 뜻합니다.",
        ["비전", "리더십", "결단"]),

    // Cups
    minor!(Cups, 1, "cups-01", "컵 에이스 (Ace of Cups)",
        "새로운 감정과 사랑, 마음이 열리는 시작을 뜻합니다.",
        "감정의 억압이나 공허함을 뜻합니다.",
        ["사랑", "감정", "시작"]),
    minor!(Cups, 2, "cups-02", "컵 2 (Two of Cups)",
        "서로 통하는 관계와 동반자 관계를 뜻합니다.",
        "관계의 불균형이나 소통의 단절을 뜻합니다.",
        ["동반자", "교감", "조화"]),
    minor!(Cups, 3, "cups-03", "컵 3 (Three of Cups)",
        "우정과 축하, 함께하는 즐거움을 뜻합니다.",
        "과도한 향락이나 관계의 소외를 뜻합니다.",
        ["우정", "축하", "공동체"]),
    minor!(Cups, 4, "cups-04", "컵 4 (Four of Cups)",
        "무관심과 권태, 주어진 기회를 보지 못함을 뜻합니다.",
        "새로운 관심이 생기며 의욕을 되찾음을 뜻합니다.",
        ["권태", "성찰", "무관심"]),
    minor!(Cups, 5, "cups-05", "컵 5 (Five of Cups)",
        "상실과 후회, 잃은 것에 대한 슬픔을 뜻합니다.",
        "슬픔에서 회복하고 남은 것을 바라봄을 뜻합니다.",
        ["상실", "후회", "슬픔"]),
    minor!(Cups, 6, "cups-06", "컵 6 (Six of Cups)",
        "추억과 순수함, 과거의 따뜻한 인연을 뜻합니다.",
        "과거에 머무르거나 현실을 외면함을 뜻합니다.",
        ["추억", "순수", "재회"]),
    minor!(Cups, 7, "cups-07", "컵 7 (Seven of Cups)",
        "많은 선택지와 환상, 망설임을 뜻합니다.",
        "환상에서 벗어나 현실적인 선택을 함을 뜻합니다.",
        ["환상", "선택", "상상"]),
    minor!(Cups, 8, "cups-08", "컵 8 (Eight of Cups)",
        "더 깊은 의미를 찾아 익숙한 것을 떠남을 뜻합니다.",
        "떠나지 못하는 망설임이나 회피를 뜻합니다.",
        ["떠남", "탐색", "전환"]),
    minor!(Cups, 9, "cups-09", "컵 9 (Nine of Cups)",
        "소원 성취와 만족, 감정적인 충족을 뜻합니다.",
        "채워지지 않는 욕심이나 겉치레의 만족을 뜻합니다.",
        ["만족", "소원", "행복"]),
    minor!(Cups, 10, "cups-10", "컵 10 (Ten of Cups)",
        "가정의 화목과 정서적인 충만함을 뜻합니다.",
        "가족이나 관계 안의 불화와 어긋남을 뜻합니다.",
        ["화목", "가족", "충만"]),
    minor!(Cups, 11, "cups-11", "컵 페이지 (Page of Cups)",
        "감수성과 새로운 감정의 메시지를 뜻합니다.",
        "감정적인 미성숙이나 실망을 뜻합니다.",
        ["감수성", "메시지", "직관"]),
    minor!(Cups, 12, "cups-12", "컵 나이트 (Knight of Cups)",
        "낭만적인 제안과 감정을 따르는 행동을 뜻합니다.",
        "비현실적인 기대나 감정 기복을 뜻합니다.",
        ["낭만", "제안", "이상"]),
    minor!(Cups, 13, "cups-13", "컵 퀸 (Queen of Cups)",
        "공감과 배려, 깊은 정서적 이해를 뜻합니다.",
        "감정 소모나 지나친 의존을 뜻합니다.",
        ["공감", "배려", "직관"]),
    minor!(Cups, 14, "cups-14", "컵 킹 (King of Cups)",
        "감정의 균형과 너그러운 포용력을 뜻합니다.",
        "감정 조절의 어려움이나 냉담함을 뜻합니다.",
        ["포용", "균형", "성숙"]),

    // Swords
    minor!(Swords, 1, "swords-01", "소드 에이스 (Ace of Swords)",
        "명확한 생각과 진실을 꿰뚫는 통찰을 뜻합니다.",
        "혼란스러운 판단이나 잘못된 정보를 뜻합니다.",
        ["명료함", "진실", "통찰"]),
    minor!(Swords, 2, "swords-02", "소드 2 (Two of Swords)",
        "결정을 미루는 교착 상태와 내적 갈등을 뜻합니다.",
        "미뤄 둔 결정을 내리거나 정보가 드러남을 뜻합니다.",
        ["교착", "선택", "회피"]),
    minor!(Swords, 3, "swords-03", "소드 3 (Three of Swords)",
        "마음의 상처와 이별, 슬픔을 뜻합니다.",
        "상처가 아물며 회복이 시작됨을 뜻합니다.",
        ["상처", "슬픔", "이별"]),
    minor!(Swords, 4, "swords-04", "소드 4 (Four of Swords)",
        "휴식과 회복, 재충전이 필요한 시기입니다.",
        "휴식 없이 무리하거나 회복이 더딘 상태입니다.",
        ["휴식", "회복", "명상"]),
    minor!(Swords, 5, "swords-05", "소드 5 (Five of Swords)",
        "이기고도 잃는 갈등과 자존심 싸움을 뜻합니다.",
        "화해의 기회나 갈등의 정리를 뜻합니다.",
        ["갈등", "자존심", "손실"]),
    minor!(Swords, 6, "swords-06", "소드 6 (Six of Swords)",
        "어려움을 떠나 더 나은 곳으로 이동함을 뜻합니다.",
        "떠나지 못하는 상황이나 미해결 문제를 뜻합니다.",
        ["이동", "전환", "회복"]),
    minor!(Swords, 7, "swords-07", "소드 7 (Seven of Swords)",
        "전략과 은밀한 행동, 속임수 가능성을 뜻합니다.",
        "진실이 드러나거나 양심에 따르는 선택을 뜻합니다.",
        ["전략", "은밀함", "기지"]),
    minor!(Swords, 8, "swords-08", "소드 8 (Eight of Swords)",
        "스스로 만든 제약과 갇힌 느낌을 뜻합니다.",
        "제약에서 벗어나 새로운 관점을 얻음을 뜻합니다.",
        ["제약", "무력감", "두려움"]),
    minor!(Swords, 9, "swords-09", "소드 9 (Nine of Swords)",
        "불안과 걱정으로 잠 못 드는 밤을 뜻합니다.",
        "걱정이 줄고 불안에서 회복됨을 뜻합니다.",
        ["불안", "걱정", "악몽"]),
    minor!(Swords, 10, "swords-10", "소드 10 (Ten of Swords)",
        "고통스러운 끝과 바닥을 친 상황을 뜻합니다.",
        "최악을 지나 회복이 시작됨을 뜻합니다.",
        ["끝", "고통", "바닥"]),
    minor!(Swords, 11, "swords-11", "소드 페이지 (Page of Swords)",
        "호기심 어린 관찰과 새로운 아이디어를 뜻합니다.",
        "험담이나 성급한 말, 경계심을 뜻합니다.",
        ["관찰", "호기심", "경계"]),
    minor!(Swords, 12, "swords-12", "소드 나이트 (Knight of Swords)",
        "빠른 결단과 거침없는 행동력을 뜻합니다.",
        "충동적인 말과 행동, 공격성을 뜻합니다.",
        ["결단", "속도", "야망"]),
    minor!(Swords, 13, "swords-13", "소드 퀸 (Queen of Swords)",
        "냉철한 판단과 솔직한 소통을 뜻합니다.",
        "지나친 냉정함이나 날카로운 비판을 뜻합니다.",
        ["명석함", "독립", "솔직함"]),
    minor!(Swords, 14, "swords-14", "소드 킹 (King of Swords)",
        "논리적 판단과 공정한 권위를 뜻합니다.",
        "권력 남용이나 냉혹한 판단을 뜻합니다.",
        ["논리", "권위", "판단"]),

    // Pentacles
    minor!(Pentacles, 1, "pentacles-01", "펜타클 에이스 (Ace of Pentacles)",
        "새로운 재정적 기회와 안정의 씨앗을 뜻합니다.",
        "놓친 기회나 불안정한 계획을 뜻합니다.",
        ["기회", "번영", "시작"]),
    minor!(Pentacles, 2, "pentacles-02", "펜타클 2 (Two of Pentacles)",
        "여러 일 사이에서 균형을 잡는 유연함을 뜻합니다.",
        "우선순위 혼란과 과부하를 뜻합니다.",
        ["균형", "유연성", "조율"]),
    minor!(Pentacles, 3, "pentacles-03", "펜타클 3 (Three of Pentacles)",
        "협력과 기술, 함께 만들어 가는 성과를 뜻합니다.",
        "팀워크 부족이나 인정받지 못하는 노력을 뜻합니다.",
        ["협력", "기술", "성장"]),
    minor!(Pentacles, 4, "pentacles-04", "펜타클 4 (Four of Pentacles)",
        "안정을 지키려는 마음과 절약을 뜻합니다.",
        "지나친 집착이나 인색함, 또는 낭비를 뜻합니다.",
        ["안정", "절약", "소유"]),
    minor!(Pentacles, 5, "pentacles-05", "펜타클 5 (Five of Pentacles)",
        "경제적 어려움과 소외감을 뜻합니다.",
        "어려움에서 회복하고 도움을 얻음을 뜻합니다.",
        ["결핍", "어려움", "고립"]),
    minor!(Pentacles, 6, "pentacles-06", "펜타클 6 (Six of Pentacles)",
        "나눔과 도움, 주고받는 균형을 뜻합니다.",
        "불공평한 거래나 조건 있는 호의를 뜻합니다.",
        ["나눔", "관대함", "균형"]),
    minor!(Pentacles, 7, "pentacles-07", "펜타클 7 (Seven of Pentacles)",
        "인내하며 결실을 기다리는 시기입니다.",
        "노력에 비해 더딘 성과와 조급함을 뜻합니다.",
        ["인내", "투자", "평가"]),
    minor!(Pentacles, 8, "pentacles-08", "펜타클 8 (Eight of Pentacles)",
        "성실한 노력과 기술을 연마하는 과정을 뜻합니다.",
        "완벽주의나 반복되는 일에 대한 지루함을 뜻합니다.",
        ["숙련", "성실", "노력"]),
    minor!(Pentacles, 9, "pentacles-09", "펜타클 9 (Nine of Pentacles)",
        "자립과 풍요, 스스로 일군 여유를 뜻합니다.",
        "과시나 재정적 불안, 지나친 의존을 뜻합니다.",
        ["자립", "풍요", "여유"]),
    minor!(Pentacles, 10, "pentacles-10", "펜타클 10 (Ten of Pentacles)",
        "장기적인 안정과 가족의 번영을 뜻합니다.",
        "재산 문제나 가족 간의 갈등을 뜻합니다.",
        ["유산", "안정", "번영"]),
    minor!(Pentacles, 11, "pentacles-11", "펜타클 페이지 (Page of Pentacles)",
        "배움에 대한 의지와 새로운 기회를 뜻합니다.",
        "계획 부족이나 집중력 저하를 뜻합니다.",
        ["배움", "계획", "기회"]),
    minor!(Pentacles, 12, "pentacles-12", "펜타클 나이트 (Knight of Pentacles)",
        "꾸준함과 책임감 있는 실천을 뜻합니다.",
        "지루함이나 정체, 지나친 신중함을 뜻합니다.",
        ["꾸준함", "책임", "신뢰"]),
    minor!(Pentacles, 13, "pentacles-13", "펜타클 퀸 (Queen of Pentacles)",
        "현실적인 돌봄과 풍요로운 안정감을 뜻합니다.",
        "일과 삶의 불균형이나 지나친 걱정을 뜻합니다.",
        ["돌봄", "실용성", "안정"]),
    minor!(Pentacles, 14, "pentacles-14", "펜타클 킹 (King of Pentacles)",
        "재정적 성공과 든든한 안정을 뜻합니다.",
        "물질에 대한 집착이나 고집을 뜻합니다.",
        ["성공", "풍요", "안정"]),
];
