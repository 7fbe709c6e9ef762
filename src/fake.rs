//! Reference pools and random field helpers.
//!
//! Pools are fixed bilingual lists sampled either cyclically (by position) or
//! at random. All randomness goes through [`FakeData`], which owns the RNG.

use crate::model::Money;
use chrono::{Days, NaiveDate, NaiveDateTime, TimeDelta};
use rand::Rng;

/// Korean company names. The first ten get a `(주)` prefix.
pub const KOREAN_COMPANIES: &[&str] = &[
    "한국전자",
    "서울무역상사",
    "부산산업",
    "대구섬유",
    "인천물류센터",
    "광주식품유통",
    "제주특산물",
    "울산화학공업",
    "대전기술연구소",
    "경기통상",
    "서울가구",
    "부산수산",
    "대구한방약품",
    "인천해운",
    "광주자동차부품",
    "제주관광개발",
    "울산조선",
    "대전바이오",
    "경기반도체",
    "서울패션",
    "부산철강",
    "대구섬유공업",
    "인천유리",
    "광주전자부품",
    "제주식품",
    "울산정유",
    "대전전자",
    "경기화학",
    "서울건설",
    "부산건설자재",
    "대구기계",
    "인천항만",
    "광주광산",
    "제주에너지",
    "울산자동차",
    "대전소프트웨어",
    "경기물류",
    "서울의료기기",
    "부산바이오",
    "대구IT",
    "인천신재생에너지",
    "광주스마트팩토리",
    "제주데이터센터",
    "울산디스플레이",
    "대전우주항공",
    "경기AI산업",
    "서울핀테크",
    "부산로봇산업",
    "대구드론",
    "인천스마트시티",
];

/// Number of leading Korean pool slots that carry the corporate marker
pub const KOREAN_CORPORATE_PREFIX_COUNT: usize = 10;
pub const KOREAN_CORPORATE_PREFIX: &str = "(주)";

pub const KOREAN_NAMES: &[&str] = &[
    "김철수", "이영희", "박민수", "최지영", "정현우", "강수진", "윤서연", "임동혁", "송미래",
    "한지훈", "김영수", "이순희", "박건호", "최미영", "정태윤", "강민석", "윤혜진", "임재현",
    "송현주", "한수연", "김동현", "이지은", "박상철", "최윤정", "정수현", "강태영", "윤미선",
    "임경호", "송재민", "한영미", "김민재", "이상훈", "박정아", "최승현", "정유진", "강도현",
    "윤서준", "임하은", "송지우", "한승우", "김시우", "이예은", "박하준", "최서윤", "정민재",
    "강유나", "윤도윤", "임서준", "송지안", "한예진",
];

pub const KOREAN_CITIES: &[&str] = &[
    "서울", "부산", "대구", "인천", "광주", "대전", "울산", "제주", "수원", "성남",
];

pub const KOREAN_REGIONS: &[&str] = &[
    "서울", "부산", "대구", "인천", "광주", "대전", "울산", "제주", "경기", "강원",
];

pub const ENGLISH_COMPANIES: &[&str] = &[
    "Tech Solutions Inc",
    "Global Trading Co",
    "Digital Innovations",
    "Advanced Manufacturing",
    "Pacific Logistics",
    "Euro Electronics",
    "Asia Pacific Trade",
    "Northern Industries",
    "Smart Tech Corp",
    "International Supply",
    "Future Systems",
    "Green Energy Ltd",
    "Advanced Materials",
    "Ocean Freight Co",
    "Digital Commerce",
    "Biotech Research",
    "Automotive Parts Ltd",
    "Cloud Services Inc",
    "Pharma Solutions",
    "Robotics International",
    "Financial Systems",
    "Renewable Power",
    "Aerospace Tech",
    "Smart Agriculture",
    "Quantum Computing",
    "Marine Solutions",
    "AI Development",
    "Logistics Solutions",
    "Construction Tech",
    "Food Processing",
    "Textile Manufacturing",
    "Chemical Industries",
    "Mining Corporation",
    "Healthcare Systems",
    "Education Technology",
    "Entertainment Media",
    "Security Solutions",
    "Environmental Tech",
    "Transportation Systems",
    "Telecommunications",
    "Water Treatment",
    "Fashion Design",
    "Gaming Studios",
    "Space Technology",
    "Furniture Design",
    "Printing Services",
    "Packaging Solutions",
    "Laboratory Equipment",
    "Sports Equipment",
    "Defense Systems",
];

pub const ENGLISH_NAMES: &[&str] = &[
    "John Smith",
    "Emily Johnson",
    "Michael Brown",
    "Sarah Davis",
    "David Wilson",
    "Sophie Martin",
    "James Lee",
    "Emma Anderson",
    "Oliver Taylor",
    "Isabella Thomas",
    "William Jackson",
    "Olivia White",
    "Ethan Harris",
    "Ava Martinez",
    "Noah Robinson",
    "Mia Clark",
    "Lucas Rodriguez",
    "Charlotte Lewis",
    "Benjamin Walker",
    "Amelia Hall",
    "Henry Allen",
    "Harper Young",
    "Alexander King",
    "Evelyn Wright",
    "Sebastian Lopez",
    "Ella Hill",
    "Jack Scott",
    "Aria Green",
    "Mason Adams",
    "Luna Baker",
    "Logan Nelson",
    "Layla Carter",
    "Elijah Mitchell",
    "Chloe Perez",
    "Matthew Roberts",
    "Avery Turner",
    "Daniel Phillips",
    "Sofia Campbell",
    "Joseph Parker",
    "Victoria Evans",
    "David Edwards",
    "Grace Collins",
    "Samuel Stewart",
    "Zoe Sanchez",
    "Ryan Morris",
    "Penelope Rogers",
    "Isaac Reed",
    "Stella Cook",
    "Christian Morgan",
    "Nora Bell",
];

pub const ENGLISH_CITIES: &[&str] = &[
    "San Francisco",
    "New York",
    "London",
    "Berlin",
    "Sydney",
    "Paris",
    "Singapore",
    "Stockholm",
    "Austin",
    "Toronto",
    "Tokyo",
    "Manchester",
    "Munich",
    "Amsterdam",
    "Seattle",
    "Zurich",
    "Milan",
    "Dublin",
    "Brussels",
    "Seoul",
    "Chicago",
    "Copenhagen",
    "Houston",
    "Rotterdam",
    "Boston",
    "Oslo",
    "San Jose",
    "Singapore",
    "Melbourne",
    "Madrid",
    "Mumbai",
    "São Paulo",
    "Johannesburg",
    "Philadelphia",
    "Edinburgh",
    "Los Angeles",
    "Tel Aviv",
    "Helsinki",
    "Vienna",
    "Hong Kong",
    "Dubai",
    "Paris",
    "San Francisco",
    "Cape Canaveral",
    "Gothenburg",
    "Hamburg",
    "Atlanta",
    "Basel",
    "Denver",
    "Arlington",
];

/// (name, category)
pub const KOREAN_PRODUCTS: &[(&str, &str)] = &[
    ("노트북", "전자제품"),
    ("마우스", "전자제품"),
    ("키보드", "전자제품"),
    ("모니터", "전자제품"),
    ("외장 SSD", "저장장치"),
    ("USB 메모리", "저장장치"),
    ("이어폰", "오디오"),
    ("스피커", "오디오"),
    ("웹캠", "전자제품"),
    ("태블릿", "전자제품"),
    ("프린터", "사무기기"),
    ("복합기", "사무기기"),
    ("스탠드", "사무용품"),
    ("의자", "가구"),
    ("캐비닛", "가구"),
    ("책상", "가구"),
    ("램프", "사무용품"),
    ("충전기", "전자제품"),
    ("케이블", "전자제품"),
    ("허브", "전자제품"),
    ("헤드셋", "오디오"),
    ("마이크", "오디오"),
    ("스캐너", "사무기기"),
    ("라벨기", "사무기기"),
    ("계산기", "사무용품"),
    ("화이트보드", "사무용품"),
    ("복사기", "사무기기"),
    ("파쇄기", "사무기기"),
    ("바인더", "사무용품"),
    ("필기구", "사무용품"),
    ("노트", "사무용품"),
    ("파일", "사무용품"),
    ("클립", "사무용품"),
    ("테이프", "사무용품"),
    ("가위", "사무용품"),
    ("스테이플러", "사무용품"),
    ("펀치", "사무용품"),
    ("자", "사무용품"),
    ("형광펜", "사무용품"),
    ("지우개", "사무용품"),
    ("수정테이프", "사무용품"),
    ("포스트잇", "사무용품"),
    ("달력", "사무용품"),
    ("플래너", "사무용품"),
    ("시계", "사무용품"),
    ("쓰레기통", "사무용품"),
    ("우산꽂이", "사무용품"),
    ("신발장", "가구"),
    ("사물함", "가구"),
    ("칸막이", "가구"),
];

/// (name, category)
pub const ENGLISH_PRODUCTS: &[(&str, &str)] = &[
    ("Laptop Computer", "Electronics"),
    ("Wireless Mouse", "Electronics"),
    ("Mechanical Keyboard", "Electronics"),
    ("Monitor 27inch", "Electronics"),
    ("External SSD", "Storage"),
    ("USB Flash Drive", "Storage"),
    ("Wireless Earbuds", "Audio"),
    ("Bluetooth Speaker", "Audio"),
    ("HD Webcam", "Electronics"),
    ("Tablet Device", "Electronics"),
    ("Laser Printer", "Office Equipment"),
    ("Multifunction Printer", "Office Equipment"),
    ("Desk Lamp", "Office Supplies"),
    ("Office Chair", "Furniture"),
    ("File Cabinet", "Furniture"),
    ("Standing Desk", "Furniture"),
    ("LED Lamp", "Office Supplies"),
    ("Power Adapter", "Electronics"),
    ("USB Cable", "Electronics"),
    ("USB Hub", "Electronics"),
    ("Gaming Headset", "Audio"),
    ("Studio Microphone", "Audio"),
    ("Document Scanner", "Office Equipment"),
    ("Label Printer", "Office Equipment"),
    ("Calculator", "Office Supplies"),
    ("Whiteboard", "Office Supplies"),
    ("Copier", "Office Equipment"),
    ("Paper Shredder", "Office Equipment"),
    ("Ring Binder", "Office Supplies"),
    ("Pen Set", "Office Supplies"),
    ("Notebook", "Office Supplies"),
    ("File Folder", "Office Supplies"),
    ("Paper Clips", "Office Supplies"),
    ("Adhesive Tape", "Office Supplies"),
    ("Scissors", "Office Supplies"),
    ("Stapler", "Office Supplies"),
    ("Hole Punch", "Office Supplies"),
    ("Ruler Set", "Office Supplies"),
    ("Highlighter", "Office Supplies"),
    ("Eraser", "Office Supplies"),
    ("Correction Tape", "Office Supplies"),
    ("Sticky Notes", "Office Supplies"),
    ("Wall Calendar", "Office Supplies"),
    ("Daily Planner", "Office Supplies"),
    ("Wall Clock", "Office Supplies"),
    ("Waste Bin", "Office Supplies"),
    ("Umbrella Stand", "Office Supplies"),
    ("Shoe Rack", "Furniture"),
    ("Storage Locker", "Furniture"),
    ("Privacy Screen", "Furniture"),
];

pub const KOREAN_SURNAMES: &[&str] = &["김", "이", "박", "최", "정", "강", "윤", "임", "송", "한"];

pub const KOREAN_GIVEN_NAMES: &[&str] = &[
    "민준", "서연", "도윤", "지우", "하은", "예준", "수아", "시우", "지호", "서준",
];

pub const ENGLISH_FIRST_NAMES: &[&str] = &[
    "John", "Emily", "Michael", "Sarah", "David", "Sophie", "James", "Emma", "Oliver", "Grace",
];

pub const ENGLISH_LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Brown", "Davis", "Wilson", "Martin", "Lee", "Anderson", "Taylor", "Clark",
];

pub const KOREAN_TITLES: &[&str] = &["사원", "대리", "과장", "차장", "부장", "팀장"];

pub const ENGLISH_TITLES: &[&str] = &[
    "Sales Representative",
    "Account Manager",
    "Team Lead",
    "Senior Analyst",
    "Operations Manager",
    "Director",
];

pub const KOREAN_DEPARTMENTS: &[&str] = &[
    "영업부", "마케팅부", "인사부", "재무부", "개발부", "물류부",
];

pub const ENGLISH_DEPARTMENTS: &[&str] = &[
    "Sales",
    "Marketing",
    "Human Resources",
    "Finance",
    "Engineering",
    "Logistics",
];

pub const PAYMENT_METHODS: &[&str] = &["Credit Card", "Bank Transfer", "Cash", "PayPal"];

pub const ORDER_NOTES: &[&str] = &[
    "Leave at front desk",
    "Call before delivery",
    "Customer's preferred delivery window: 9-12",
    "포장 주의",
    "문 앞에 놓아주세요",
];

/// Discount amounts, weighted toward no discount
pub const DISCOUNTS: &[i64] = &[0, 0, 0, 5, 10];

/// Calendar date from literal components
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Fake data generator with an owned RNG
pub struct FakeData<R: Rng> {
    rng: R,
}

impl<R: Rng> FakeData<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Random integer in `min..=max`
    pub fn int_range(&mut self, min: i64, max: i64) -> i64 {
        self.rng.random_range(min..=max)
    }

    /// Random count in `min..=max`
    pub fn count_range(&mut self, min: u32, max: u32) -> u32 {
        self.rng.random_range(min..=max)
    }

    /// Random 1-based position into a set of `len` records
    pub fn ordinal(&mut self, len: usize) -> usize {
        self.rng.random_range(1..=len)
    }

    /// Random amount in `[min, max]` with cent precision
    pub fn price(&mut self, min_units: i64, max_units: i64) -> Money {
        Money::from_cents(self.rng.random_range(min_units * 100..=max_units * 100))
    }

    /// Generate a boolean with given probability of true
    pub fn bool_with_probability(&mut self, probability: f64) -> bool {
        self.rng.random_bool(probability)
    }

    /// Pick a random element from a slice
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.rng.random_range(0..items.len())]
    }

    /// Four random digits, `1000..=9999`
    pub fn digits4(&mut self) -> u32 {
        self.rng.random_range(1000..=9999)
    }

    /// Random date in `start..=end`
    pub fn date_between(&mut self, start: NaiveDate, end: NaiveDate) -> NaiveDate {
        let span = (end - start).num_days().max(0) as u64;
        let offset = self.rng.random_range(0..=span);
        start.checked_add_days(Days::new(offset)).unwrap_or(end)
    }

    /// Random timestamp with whole seconds in `start..=end`
    pub fn datetime_between(&mut self, start: NaiveDateTime, end: NaiveDateTime) -> NaiveDateTime {
        let span = (end - start).num_seconds().max(0);
        let offset = self.rng.random_range(0..=span);
        start
            .checked_add_signed(TimeDelta::seconds(offset))
            .unwrap_or(end)
    }

    /// `base` shifted forward by `min..=max` whole days
    pub fn days_after(&mut self, base: NaiveDateTime, min: u64, max: u64) -> NaiveDateTime {
        let days = self.rng.random_range(min..=max);
        base.checked_add_days(Days::new(days)).unwrap_or(base)
    }
}
