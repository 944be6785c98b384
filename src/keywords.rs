//! The builtin keyword taxonomy: every evidence category and its pattern
//! fragments, across the languages and scripts the crawler sees.
//!
//! Fragments are in the `regex` crate dialect. Latin, Cyrillic and Hebrew
//! entries are compiled with word-boundary anchors; CJK, kana, Hangul and
//! Thai entries match as contiguous substrings (see `language.rs`).

use crate::corpus::{Fragment, KeywordCorpus, Token};
use crate::error::Result;

/// Tokens for every builtin category, handed to the compiler and engine.
pub struct Categories {
    pub strong_dance: Token,
    pub easy_dance: Token,
    pub ambiguous_dance_music: Token,
    pub easy_choreo: Token,
    pub battle: Token,
    pub class: Token,
    pub audition: Token,
    pub judge: Token,
    pub cypher: Token,
    pub session: Token,
    pub versus: Token,
    pub obvious_battle: Token,
    pub contest: Token,
    pub easy_event: Token,
    pub practice: Token,
    pub performance: Token,
    pub club_only: Token,
    pub dance_wrong_style: Token,
    pub preprocess_removal: Token,
    pub manual: Token,
}

impl Categories {
    /// Tokens forming the EVENT union: competitions, battles, workshops,
    /// auditions, judges, cyphers, versus brackets, sessions.
    pub fn event_tokens(&self) -> Vec<&Token> {
        vec![
            &self.battle,
            &self.contest,
            &self.class,
            &self.audition,
            &self.judge,
            &self.cypher,
            &self.session,
            &self.versus,
            &self.obvious_battle,
        ]
    }

    /// Tokens forming the CLUB_AND_EVENT union: terms ambiguous between a
    /// club night and a dance show.
    pub fn club_and_event_tokens(&self) -> Vec<&Token> {
        vec![&self.practice, &self.performance]
    }

    /// Every positive-evidence token: the dance categories plus all event
    /// categories. Feeds the annotator's "good" union.
    pub fn good_tokens(&self) -> Vec<&Token> {
        let mut tokens = vec![
            &self.strong_dance,
            &self.easy_dance,
            &self.ambiguous_dance_music,
            &self.easy_choreo,
            &self.manual,
            &self.easy_event,
        ];
        tokens.extend(self.event_tokens());
        tokens.extend(self.club_and_event_tokens());
        tokens
    }

    /// Negative-evidence tokens. Feeds the annotator's "bad" union.
    pub fn wrong_tokens(&self) -> Vec<&Token> {
        vec![&self.dance_wrong_style, &self.club_only]
    }
}

/// Assemble the builtin corpus. The MANUAL category is created empty
/// here; the keyword loader fills it from the curated files before
/// anything is compiled.
pub fn builtin_corpus() -> Result<(KeywordCorpus, Categories)> {
    let corpus = KeywordCorpus::new();

    let categories = Categories {
        strong_dance: corpus.token("STRONG_DANCE")?,
        easy_dance: corpus.token("EASY_DANCE")?,
        ambiguous_dance_music: corpus.token("AMBIGUOUS_DANCE_MUSIC")?,
        easy_choreo: corpus.token("EASY_CHOREO")?,
        battle: corpus.token("BATTLE")?,
        class: corpus.token("CLASS")?,
        audition: corpus.token("AUDITION")?,
        judge: corpus.token("JUDGE")?,
        cypher: corpus.token("CYPHER")?,
        session: corpus.token("SESSION")?,
        versus: corpus.token("VERSUS")?,
        obvious_battle: corpus.token("OBVIOUS_BATTLE")?,
        contest: corpus.token("CONTEST")?,
        easy_event: corpus.token("EASY_EVENT")?,
        practice: corpus.token("PRACTICE")?,
        performance: corpus.token("PERFORMANCE")?,
        club_only: corpus.token("CLUB_ONLY")?,
        dance_wrong_style: corpus.token("DANCE_WRONG_STYLE")?,
        preprocess_removal: corpus.token("PREPROCESS_REMOVAL")?,
        manual: corpus.token("MANUAL")?,
    };

    register_easy_dance(&corpus, &categories)?;
    register_easy_choreo(&corpus, &categories)?;
    register_ambiguous_dance_music(&corpus, &categories)?;
    register_strong_dance(&corpus, &categories)?;
    register_event_categories(&corpus, &categories)?;
    register_club_and_event(&corpus, &categories)?;
    register_club_only(&corpus, &categories)?;
    register_dance_wrong_style(&corpus, &categories)?;
    register_preprocess_removal(&corpus, &categories)?;

    log::info!(
        "builtin corpus assembled: {} categories",
        corpus.summary().len()
    );
    Ok((corpus, categories))
}

fn register_easy_dance(corpus: &KeywordCorpus, c: &Categories) -> Result<()> {
    corpus.register_terms(
        &c.easy_dance,
        &[
            r"dance style[sz]",
            r"dances?",
            r"dancin[g']?",
            r"dancers?",
            "댄스",          // Korean dance
            "댄서.?.?",      // Korean dancers
            "춤.?",          // Korean dance
            "추고.?.?",      // Korean dancing
            "танцы",         // Russian dancing
            "танцоров",      // Russian dancers
            "танцуват",      // Bulgarian dance
            "танцува",       // Bulgarian dance
            "танцовия",      // Bulgarian dance
            "изтанцуват",    // Bulgarian dancing
            "танчер",        // Macedonian dancer
            "танцовиот",     // Macedonian dance
            "ダンサー",      // Japanese dancer
            "ダンス",        // Japanese dance
            "踊り",          // Japanese dance
            "רוקד",          // Hebrew dance
            "רקדם",          // Hebrew dancers
            "רוקדים",        // Hebrew dance
            "רקדנים",        // Hebrew dancers
            "舞者",          // Chinese dancer
            "舞技",          // Chinese dancing
            "舞",            // Chinese dance
            "舞蹈",          // Chinese dance
            "排舞",          // Chinese line dance
            "แดนซ์",          // Thai dance (loanword)
            "เต้น",            // Thai dance
            "กเต้น",           // Thai dancers
            r"danse\w*",     // French/Danish
            "danser",
            "danseur",
            "taniec",        // Polish
            r"tane?[cč][íú\w]*", // Slovak/Czech
            r"zatanč\w*",    // Czech
            r"tańe?c\w*",    // Polish/Czech
            r"danç\w*",      // Portuguese
            r"danza\w*",     // Italian
            r"šok\w*",       // Lithuanian
            r"tanz\w*",      // German
            r"tanssi\w*",    // Finnish
            r"bail[ae]\w*",  // Spanish
            "danzas",        // Spanish
            "ballerin[io]",  // Italian dancer
            "dansare",       // Swedish dancers
            "dansat",        // Swedish dancing
            "dansama",       // Swedish dancers
            r"dansa\w*",     // Swedish
            "dansgolv",      // Swedish dance floor
            "dans",          // Swedish/Danish
            "tänzern",       // German dancers
            "tänzer",        // German dancer
            "plesa",         // Croatian dance
            "plesu",         // Croatian dancing
            "nhảy",          // Vietnamese dance
            "footwork",
        ],
    )
}

fn register_easy_choreo(corpus: &KeywordCorpus, c: &Categories) -> Result<()> {
    corpus.register_terms(
        &c.easy_choreo,
        &[
            // English, Italian, Finnish, Swedish, German, Lithuanian,
            // Polish, Spanish, Portuguese, Danish in one family.
            r"(?:ch|k|c)oe?re[oó]?gra(?:ph|f)\w*",
            "choreo",
            "chorée",          // French
            r"chorégraph\w*",  // French choreographer
            "кореограф",       // Macedonian
        ],
    )
}

fn register_ambiguous_dance_music(corpus: &KeywordCorpus, c: &Categories) -> Result<()> {
    corpus.register_terms(
        &c.ambiguous_dance_music,
        &[
            r"hip\W?hop\w*",
            "嘻哈",            // Chinese hiphop
            "ההיפ הופ",        // Hebrew hiphop
            "хипхоп",          // Macedonian hiphop
            "ヒップホップ",    // Japanese hiphop
            "힙합",            // Korean hiphop
            r"all\W?style[zs]?",
            r"tou[ts]\W?style[zs]?", // French all-styles
            "tutti gli stili", // Italian all-styles
            r"be\W?bop",
            "shuffle",
            "funk",
            r"dance\W?hall\w*",
            "ragga",
            "hype",
            r"new\W?jack\W?swing",
            "gliding",
            "boogaloo",
            r"breakin[g']?",
            "breakers?",
            "jerk",
            "kpop",
            "rnb",
            r"poppin'?",
            r"hard\Whitting",
            r"electro\W?dance",
            r"old\W?school hip\W?hop",
            r"90\W?s hip\W?hop",
            "vogue",
            "フリースタイル",  // Japanese freestyle
            r"b\W?boy\w*",     // also 'bboyev', Slovak
        ],
    )
}

fn register_strong_dance(corpus: &KeywordCorpus, c: &Categories) -> Result<()> {
    let base: &[&str] = &[
        r"street\W?jam",
        "breakingu",        // Polish breaking
        "breaktánc",        // Hungarian breakdance
        "ブレイク",         // Japanese breakdance
        "jazz rock",
        r"funk\W?style[sz]?",
        "poppers?",
        r"popp?i?ng",
        "poppeurs?",
        r"commercial hip\W?hop",
        r"hip\W?hop dance",
        r"jerk(?:ers?|in[g']?)",
        "스트릿",           // Korean street
        "ストリートダンス", // Japanese street dance
        "街舞",             // Chinese street dance
        "gatvės šokių",     // Lithuanian street dance
        r"katutanssi\w*",   // Finnish street dance
        r"bre?ak\W?dancin[g']?",
        r"bre?ak\W?dancer?s?",
        r"break\W?danc\w+",
        r"rock\W?dan[cs]\w+",
        r"(?:lite|light)\W?feet",
        r"gettin[g']?\W?(?:lite|light)",
        r"turfin[g']?",
        r"turf danc\w+",
        r"flexin[g']?",
        r"buckin[g']?",
        r"jookin[g']?",
        r"b\W?boy[sz]?",
        r"b\W?boyin[g']?",
        r"b\W?girl[sz]?",
        r"b\W?girlin[g']?",
        r"power\W?moves?",
        "파워무브",         // Korean powermove
        r"footworkin[g']?",
        "footworks",        // Spanish
        "breakeuse",        // French b-girl
        r"top\W?rock(?:s|er[sz]?|in[g']?)?",
        r"up\W?rock(?:s|er[sz]?|in[g']?|)?",
        "houser[sz]?",
        "dance house",      // seen in Italian
        "soul dance",
        "ソウルダンス",     // Japanese soul dance
        r"lock(?:er[sz]?|in[g']?)?",
        "lock dance",
        "ロッカーズ",       // Japanese lockers
        "ロッカ",           // Japanese lock
        r"[uw]h?aa?c?c?k(?:er[sz]?|inn?[g']?)", // waacking
        r"paa?nc?kin[g']?", // punking
        "locking4life",
        r"dance crew[sz]?",
        r"wavin[g']?",
        "wavers?",
        r"liquid\W+dance",
        r"liquid\W+(?:\w+\W+)?digitz",
        r"finger\W+digitz",
        r"toy\W?man",
        r"puppet\W?style",
        r"bott?in[g']?",
        r"robott?in[g']?",
        "melbourne shuffle",
        "strutter[sz]?",
        "strutting",
        r"tuttin[g']?",
        "tutter[sz]?",
        r"mj\W+style",
        "michael jackson style",
        r"mtv\W?style",
        r"mtv\W?dance",
        r"videoclip\w+",
        "videodance",
        r"hip\W?hop\Wheels",
        r"l\W?a\W?\Wdance",
        r"n(?:ew|u)\W?style",
        r"n(?:ew|u)\W?style\Whip\W?hop",
        r"hip\W?hop\Wn(?:ew|u)\W?style",
        r"mix(?:ed)?\W?style[sz]?",
        r"open\W?style[sz]",
        r"all\W+open\W?style[sz]?",
        r"open\W+all\W?style[sz]?",
        "me against the music",
        "krump",
        r"krumpin[g']?",
        "krumper[sz]?",
        r"ragga\W?jamm?",
        r"girl\W?s\W?hip\W?hop",
        r"hip\W?hopp?er[sz]?",
        r"street\W?jazz",
        r"street\W?funk",
        r"jazz\W?funk",
        r"funk\W?jazz",
        r"boom\W?crack",
        r"hype danc\w*",
        r"social hip\W?hop",
        r"hip\W?hop social dance[sz]",
        r"hip\W?hop party dance[sz]",
        r"hip\W?hop grooves",
        r"(?:new|nu|middle)\W?s(?:ch|k)ool\W\W?hip\W?hop",
        r"hip\W?hop\W\W?(?:old|new|nu|middle)\W?s(?:ch|k)ool",
        "newstyleurs?",
        "voguer[sz]?",
        r"vogue?in[g']?",
        "vogue fem",
        "voguin",
        "vouge",
        r"vougin[g']?",
        "fem queen",
        "butch queen",
        r"mini\W?ball",
        "realness",
        r"new\W?style hustle",
        r"urban danc\w*",
        r"urban style[sz]",
        "urban contemporary",
        r"dan[çc]\w* urban\w*",
        r"dan\w+ urbai?n\w+",   // Spanish/French urban dance
        r"baile urbai?n\w+",    // Spanish urban dance
        r"estilo\w* urbai?n\w+", // Spanish urban styles
        r"pop\W{0,3}(?:(?:N|and|an)\W{1,3})?lock(?:in[g']?|er[sz]?)?",
    ];
    corpus.register_terms(&c.strong_dance, base)?;

    // Polish declension tacks a 'u' onto borrowed terms (lockingu,
    // breakdance'u); cover every base fragment once more with the suffix.
    let declined: Vec<Fragment> = base
        .iter()
        .map(|p| Fragment::new(format!("{p}u")))
        .collect();
    corpus.register(&c.strong_dance, declined)
}

fn register_event_categories(corpus: &KeywordCorpus, c: &Categories) -> Result<()> {
    corpus.register_terms(
        &c.battle,
        &[
            "battle of the year",
            "boty",
            "compete",
            "competitions?",
            "konkurrence",     // Danish competition
            "competencia",     // Spanish competition
            "competición",     // Spanish competition
            "compétition",     // French competition
            "thi nhảy",        // Vietnamese dance competition
            r"kilpailu\w*",    // Finnish competition
            "konkursams",      // Lithuanian competition
            "verseny",         // Hungarian competition
            "championships?",
            "champs?",
            "čempionatams",    // Lithuanian championship
            "campeonato",      // Spanish championship
            "meisterschaft",   // German championship
            "concorsi",        // Italian competition
            "danstävling",     // Swedish dance competition
            "แข่งขัน",           // Thai competition
            r"crew battle[sz]?",
            r"exhibition battle[sz]?",
            "battles?",
            "battlu(?:je)?",   // Czech
            "比賽",            // Chinese battle
            "バトル",          // Japanese battle
            "битката",         // Bulgarian battle
            "batallas",        // Spanish battles
            "zawody",          // Polish contest
            "walki",           // Polish fight
            "walkę",           // Polish fight
            "bitwa",           // Polish battle
            "bitwę",           // Polish battle
            "bitwach",         // Polish battles
            "tournaments?",
            "tournoi",         // French tournament
            "大会",            // Japanese tournament
            "トーナメント",    // Japanese tournament
            r"turnie\w*",      // Polish/German tournament
            "giải đấu",        // Vietnamese tournament
            "thi đấu",         // Vietnamese competition
            "състезанието",    // Bulgarian competition
            "đấu",             // Vietnamese game
            "turneringer",     // Danish tournament
            "preselections?",
            "présélections?",  // French preselections
            r"crew\W?v[sz]?\W?crew",
            "prelims?",
            "初賽",            // Chinese preliminaries
        ],
    )?;

    corpus.register_terms(
        &c.contest,
        &[
            "contests?",
            "concours",      // French
            "konkurrencer",  // Danish
            "dancecontests", // German
        ],
    )?;

    corpus.register_terms(
        &c.class,
        &[
            r"work\W?shop\W?s?",
            "ワークショップ", // Japanese workshop
            "cursillo",       // Spanish workshop
            "ateliers",       // French workshop
            "workshopy",      // Czech workshop
            "סדנאות",         // Hebrew workshops
            "סדנה",           // Hebrew workshop
            "delavnice",      // Slovenian workshop
            "talleres",       // Spanish workshops
            "radionicama",    // Croatian workshop
            "warsztaty",      // Polish workshop
            "warsztatów",     // Polish workshop
            "seminarų",       // Lithuanian workshop
            "taller de",      // Spanish workshop
            "intensives?",
            "intensivo",      // Spanish intensive
            "class with",
            r"master\W?class(?:es)?",
            "company class",
            "мастер-класса?", // Russian master class
            "класса?",        // Russian class
            "class(?:es)?",
            "lessons?",
            "courses?",
            "klass(?:en)?",   // Slovak class
            "수업",           // Korean class
            "수업을",         // Korean classes
            "lekc[ie]",       // Czech lesson
            "課程",           // Chinese course
            "課",             // Chinese class
            "堂課",           // Chinese lesson
            "コース",         // Japanese course
            "concorso",       // Italian course
            "kurs(?:y|en)?",  // German/Polish course
            "aulas?",         // Portuguese classes
            "특강",           // Korean lecture
            "lektion(?:en)?", // German lecture
            "lekcie",         // Slovak lessons
            "dansklasser",    // Swedish dance classes
            "lekcj[ai]",      // Polish lesson
            "eigoje",         // Lithuanian course
            "pamokas",        // Lithuanian lesson
            "kursai",         // Lithuanian course
            "lezione",        // Italian lesson
            "lezioni",        // Italian lessons
            "zajęciach",      // Polish class
            "zajęcia",        // Polish classes
            "คลาส",           // Thai class
            "classe",         // Italian class
            "classi",         // Italian classes
            "klasser?",       // Norwegian class
            "cours",
            "clases?",
            "camp",
            "kamp",
            "kemp",
            "formazione",     // Italian training
            "formazioni",     // Italian trainings
            "トレーニング",   // Japanese training
        ],
    )?;

    corpus.register_terms(
        &c.audition,
        &[
            r"try\W?outs?",
            "casting",
            "casting call",
            "castingul",   // Romanian casting
            "auditions?",
            "audicija",    // Croatian audition
            "audiciones",  // Spanish auditions
            "konkurz",     // Czech audition
            "試鏡",        // Chinese audition
            "audizione",   // Italian audition
            "naborem",     // Polish recruitment
        ],
    )?;

    corpus.register_terms(
        &c.judge,
        &[
            "jurys?",
            "jurados?",        // Spanish jury
            "журито",          // Bulgarian jury
            "judge[sz]?",
            "jures",           // French jury
            "(?:les? )?juges?", // French judges
            "giudici",         // Italian judges
            "השופט",           // Hebrew judge
            "השופטים",         // Hebrew judges
            "teisėjai",        // Lithuanian judges
            "tuomaristo",      // Finnish jury
            "jueces",          // Spanish judges
            "juriu",           // Romanian judges
            "giuria",          // Italian jury
            "評審",            // Chinese judges
            "評判",            // Chinese judges
            "評判團",          // Chinese judging panel
            "審査員",          // Japanese judges
            "ジャッジ",        // Japanese judges
        ],
    )?;

    corpus.register_terms(
        &c.cypher,
        &[
            "c(?:y|i)ph(?:a|ers?)",
            "サイファ",   // Japanese cypher
            "サイファー", // Japanese cypher
            "サークル",   // Japanese circle
            "cerchi",     // Italian circles
            "ไซเฟอร์",      // Thai cypher
            "싸이퍼.?",   // Korean cypher
        ],
    )?;

    corpus.register_terms(
        &c.session,
        &[
            "open circles",
            "session", // plural 'sessions' counts as club-and-event instead
            "セッション", // Japanese session
            "練習会",     // Japanese training meet
            "練習",       // Japanese practice
            "abdc",
            r"america\W?s best dance crew",
        ],
    )?;

    let versus: Vec<Fragment> = versus_patterns().into_iter().map(Fragment::new).collect();
    corpus.register(&c.versus, versus)?;

    corpus.register_terms(
        &c.obvious_battle,
        &[
            "apache line",
            r"(?:seven|7)\W*(?:to|two|2)\W*(?:smoke|smook|somke)",
        ],
    )
}

/// Versus-bracket patterns: `1v1` … `11v11`, `2 vs. 2`, `3x3`,
/// `seven on seven`, with the separators seen across languages.
fn versus_patterns() -> Vec<String> {
    let english_separators = ["v/s", r"vs?\.?", "on", "x", "×"];
    let all_separators = {
        let mut seps = english_separators.to_vec();
        seps.extend(["na", "mot", "contra", "contre"]);
        seps
    };
    let english = english_separators.join("|");
    let all = all_separators.join("|");

    let mut patterns = Vec::new();
    for i in 1..=11 {
        patterns.push(format!("{i}[ -]?(?:{all})[ -]?{i}"));
    }
    for word in [
        "one", "two", "three", "four", "five", "six", "seven", "eight",
    ] {
        patterns.push(format!("{word}[ -](?:{english})[ -]{word}"));
    }
    patterns
}

fn register_club_and_event(corpus: &KeywordCorpus, c: &Categories) -> Result<()> {
    corpus.register_terms(
        &c.easy_event,
        &[
            "jams?",
            "club",
            r"after\Wparty",
            r"pre\Wparty",
            "クラブ", // Japanese club
            "open sessions?",
            "training",
        ],
    )?;

    corpus.register_terms(
        &c.practice,
        &[
            "sesja", // Polish session
            "sessions",
            "practice",
        ],
    )?;

    corpus.register_terms(
        &c.performance,
        &[
            "shows?",
            "performances?",
            r"show\W?case",
            "représentation", // French performance
            "ショーケース",   // Japanese showcase
            "秀",             // Chinese show
            "的表演",         // Chinese performance
            "表演",           // Chinese performance
            "vystoupení",     // Czech performances
            "výkonnostních",  // Czech performance
            "изпълнението",   // Bulgarian performance
            "パフォーマンス", // Japanese performance
            "esibizioni",     // Italian exhibition
        ],
    )
}

fn register_club_only(corpus: &KeywordCorpus, c: &Categories) -> Result<()> {
    corpus.register_terms(
        &c.club_only,
        &[
            "club",
            "bottle service",
            "table service",
            "coat check",
            "free before",
            "vip",
            r"guest\W?list",
            "drink specials?",
            r"resident dj\W?s?",
            "residency",
            "ravers?",
            r"dj\W?s?",
            "techno",
            "trance",
            "indie",
            "glitch",
            "bands?",
            "dress to",
            "mixtape",
            "decks",
            "r&b",
            r"local dj\W?s?",
            "all night",
            "lounge",
            "live performances?",
            "doors", // doors open at x
            "restaurant",
            "hotel",
            "music shows?",
            "a night of",
            "dance floor",
            "beer",
            "bartenders?",
            "waiters?",
            "waitress(?:es)?",
            r"go\W?go",
        ],
    )
}

fn register_dance_wrong_style(corpus: &KeywordCorpus, c: &Categories) -> Result<()> {
    corpus.register_terms(
        &c.dance_wrong_style,
        &[
            "styling",
            "salsa",
            "salsy",        // Czech salsa
            "salser[oa]s?",
            "bachata",
            "balboa",
            "tango",
            "latin",
            "latines",
            "lindy",
            "lindyhop",
            "swing",
            "wcs",
            "samba",
            "quickstep",
            "rumba",
            r"cha\W?cha",
            "blues",
            "waltz",
            "kizomba",
            "disco dance",
            r"disco tan\w+", // Czech disco dance
            "milonga",
            "dance partner",
            "hula",
            "tumbling",
            "exotic",
            "cheer",
            "barre",
            "butoh",
            r"contato improv\w*",
            r"contact improv\w*",
            "contratto mimo", // Italian contact mime
            "musical theat(?:re|er)",
            r"pole danc\w+",
            r"flirt danc\w+",
            "bollywood",
            "kalbeliya",
            "bhawai",
            "teratali",
            "ghumar",
            "indienne",
            "persiana?",
            "arabe",
            "arabic",
            "araba",
            r"oriental\w*",
            "oriente",
            "cubana",
            "capoeira",
            "tahitian dancing",
            "tahitienne",
            r"folklor\w+",
            "burlesque",
            "バーレスク", // Japanese burlesque
            "limon",
            r"artist\Win\Wresidence",
            "disciplinary",
            "reflective",
            "clogging",
            "zouk",
            "african dance",
            "afro dance",
            "afro mundo",
            "class?ic[ao]",
            "acroyoga",
            "kirtan",
            r"hoop\W?dance",
            "modern dance",
            "pilates",
            "tribal",
            "jazz",
            "tap",
            "contemporary",
            "súčasný",       // Slovak contemporary
            "współczesnego", // Polish contemporary
            r"contempor\w*", // Italian/French contemporary
            r"africa\w+",
            "sabar",
            "aerial silk",
            "silk",
            "aerial",
            "zumba",
            r"belly\W?danc(?:e(?:rs?)?|ing)",
            "bellycraft",
            "worldbellydancealliance",
            "soca",
            "flamenco",
            "technique",
            "guest artists?",
            "partnering",
            "charleston",
        ],
    )
}

fn register_preprocess_removal(corpus: &KeywordCorpus, c: &Categories) -> Result<()> {
    corpus.register_terms(
        &c.preprocess_removal,
        &[
            // Protects a known good phrase from the wrong-style 'tap'.
            "tap water",
            // Known false-positive phrases around otherwise-strong terms.
            "america's got talent",
            "jerk chicken",
            "poker tournaments?",
            "fashion competition",
            "wrestling competition",
            "t?shirt competition",
            "shaking competition",
            "costume competition",
            r"bottles? popping?",
            r"poppin.? bottles?",
            "dance fitness",
            "lock down",
            "lock up",
            "lock in",
            "latin street dance",
            "latin street",
            "whack music",
            "wack music",
            "marvellous dance crew",
            "1st class",
            "first class",
            "world class",
            r"world\Wclass",
            "top class",
            "pledge class",
            r"class\W?rnb",
            "class act",
            r"go\W?go\W?danc(?:ers?|ing?)",
            r"ice\w?breaker",
            "straight up",     // up rock
            r"tear\W?jerker",  // jerker
            "in-strutter",     // strutter
            "on stage",
            r"main\Wstage",
            "of course",
            "breaking down",
            r"ground\W?breaking",
            "(?:second|2nd) stage",
            "open house",
            r"hip\W?hop\W?kempu?", // refers to hiphop music
            r"camp\W?house",
            r"in\W?house",
            "juste debout school",
            "baile funk",
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::BoundaryPolicy;

    #[test]
    fn test_builtin_corpus_builds() {
        let (corpus, categories) = builtin_corpus().unwrap();
        assert!(corpus.fragment_count(&categories.easy_dance) > 40);
        assert!(corpus.fragment_count(&categories.strong_dance) > 100);
        assert!(corpus.fragment_count(&categories.battle) > 30);
        assert!(corpus.fragment_count(&categories.club_only) > 20);
        assert!(corpus.fragment_count(&categories.dance_wrong_style) > 50);
        // MANUAL stays empty until the loader runs.
        assert_eq!(corpus.fragment_count(&categories.manual), 0);
    }

    #[test]
    fn test_categories_mix_boundary_policies() {
        let (corpus, categories) = builtin_corpus().unwrap();
        let fragments = corpus.fragments_for(&[&categories.easy_dance]).unwrap();
        let anchored = fragments
            .iter()
            .filter(|f| f.boundary() == BoundaryPolicy::Anchored)
            .count();
        let contiguous = fragments
            .iter()
            .filter(|f| f.boundary() == BoundaryPolicy::Contiguous)
            .count();
        assert!(anchored > 0, "expected Latin/Cyrillic/Hebrew entries");
        assert!(contiguous > 0, "expected CJK/Thai entries");
    }

    #[test]
    fn test_versus_patterns_shape() {
        let patterns = versus_patterns();
        // 11 digit brackets plus 8 word brackets.
        assert_eq!(patterns.len(), 19);
        assert!(patterns[0].starts_with("1[ -]?"));
        assert!(patterns.iter().any(|p| p.starts_with("seven")));
    }

    #[test]
    fn test_event_token_set() {
        let (_, categories) = builtin_corpus().unwrap();
        let names: Vec<&str> = categories.event_tokens().iter().map(|t| t.name()).collect();
        assert!(names.contains(&"BATTLE"));
        assert!(names.contains(&"CLASS"));
        assert!(names.contains(&"AUDITION"));
        assert!(names.contains(&"VERSUS"));
        assert!(!names.contains(&"CLUB_ONLY"));
    }
}
