//! ISO 639-2 table
//!
//! Every language with an ISO 639-1 (alpha-2) code, plus the alpha-3-only
//! codes that show up in catalog records (historical languages, `mul`,
//! `und`, `zxx`). Names follow the Library of Congress ISO 639-2 list.

/// One registry row: bibliographic alpha-3, terminology alpha-3 (only where
/// it differs), alpha-2, English names in preference order.
pub(crate) type Row = (
    &'static str,
    Option<&'static str>,
    Option<&'static str>,
    &'static [&'static str],
);

pub(crate) const ISO_639_2: &[Row] = &[
    ("aar", None, Some("aa"), &["Afar"]),
    ("abk", None, Some("ab"), &["Abkhazian"]),
    ("ace", None, None, &["Achinese"]),
    ("afr", None, Some("af"), &["Afrikaans"]),
    ("aka", None, Some("ak"), &["Akan"]),
    ("alb", Some("sqi"), Some("sq"), &["Albanian"]),
    ("amh", None, Some("am"), &["Amharic"]),
    ("ang", None, None, &["English, Old (ca. 450-1100)"]),
    ("ara", None, Some("ar"), &["Arabic"]),
    ("arg", None, Some("an"), &["Aragonese"]),
    ("arm", Some("hye"), Some("hy"), &["Armenian"]),
    ("asm", None, Some("as"), &["Assamese"]),
    ("ast", None, None, &["Asturian", "Bable", "Leonese", "Asturleonese"]),
    ("ava", None, Some("av"), &["Avaric"]),
    ("ave", None, Some("ae"), &["Avestan"]),
    ("aym", None, Some("ay"), &["Aymara"]),
    ("aze", None, Some("az"), &["Azerbaijani"]),
    ("bak", None, Some("ba"), &["Bashkir"]),
    ("bam", None, Some("bm"), &["Bambara"]),
    ("baq", Some("eus"), Some("eu"), &["Basque"]),
    ("bel", None, Some("be"), &["Belarusian"]),
    ("ben", None, Some("bn"), &["Bengali"]),
    ("bih", None, Some("bh"), &["Bihari languages"]),
    ("bis", None, Some("bi"), &["Bislama"]),
    ("bos", None, Some("bs"), &["Bosnian"]),
    ("bre", None, Some("br"), &["Breton"]),
    ("bul", None, Some("bg"), &["Bulgarian"]),
    ("bur", Some("mya"), Some("my"), &["Burmese"]),
    ("cat", None, Some("ca"), &["Catalan", "Valencian"]),
    ("cha", None, Some("ch"), &["Chamorro"]),
    ("che", None, Some("ce"), &["Chechen"]),
    ("chi", Some("zho"), Some("zh"), &["Chinese"]),
    ("chr", None, None, &["Cherokee"]),
    ("chu", None, Some("cu"), &["Church Slavic", "Old Slavonic", "Church Slavonic", "Old Bulgarian", "Old Church Slavonic"]),
    ("chv", None, Some("cv"), &["Chuvash"]),
    ("cor", None, Some("kw"), &["Cornish"]),
    ("cos", None, Some("co"), &["Corsican"]),
    ("cre", None, Some("cr"), &["Cree"]),
    ("cze", Some("ces"), Some("cs"), &["Czech"]),
    ("dan", None, Some("da"), &["Danish"]),
    ("div", None, Some("dv"), &["Divehi", "Dhivehi", "Maldivian"]),
    ("dut", Some("nld"), Some("nl"), &["Dutch", "Flemish"]),
    ("dzo", None, Some("dz"), &["Dzongkha"]),
    ("eng", None, Some("en"), &["English"]),
    ("enm", None, None, &["English, Middle (1100-1500)"]),
    ("epo", None, Some("eo"), &["Esperanto"]),
    ("est", None, Some("et"), &["Estonian"]),
    ("ewe", None, Some("ee"), &["Ewe"]),
    ("fao", None, Some("fo"), &["Faroese"]),
    ("fij", None, Some("fj"), &["Fijian"]),
    ("fil", None, None, &["Filipino", "Pilipino"]),
    ("fin", None, Some("fi"), &["Finnish"]),
    ("fre", Some("fra"), Some("fr"), &["French"]),
    ("frm", None, None, &["French, Middle (ca. 1400-1600)"]),
    ("fro", None, None, &["French, Old (842-ca. 1400)"]),
    ("fry", None, Some("fy"), &["Western Frisian"]),
    ("ful", None, Some("ff"), &["Fulah"]),
    ("geo", Some("kat"), Some("ka"), &["Georgian"]),
    ("ger", Some("deu"), Some("de"), &["German"]),
    ("gla", None, Some("gd"), &["Gaelic", "Scottish Gaelic"]),
    ("gle", None, Some("ga"), &["Irish"]),
    ("glg", None, Some("gl"), &["Galician"]),
    ("glv", None, Some("gv"), &["Manx"]),
    ("gmh", None, None, &["German, Middle High (ca. 1050-1500)"]),
    ("goh", None, None, &["German, Old High (ca. 750-1050)"]),
    ("grc", None, None, &["Greek, Ancient (to 1453)"]),
    ("gre", Some("ell"), Some("el"), &["Greek, Modern (1453-)"]),
    ("grn", None, Some("gn"), &["Guarani"]),
    ("gsw", None, None, &["Swiss German", "Alemannic", "Alsatian"]),
    ("guj", None, Some("gu"), &["Gujarati"]),
    ("hat", None, Some("ht"), &["Haitian", "Haitian Creole"]),
    ("hau", None, Some("ha"), &["Hausa"]),
    ("haw", None, None, &["Hawaiian"]),
    ("heb", None, Some("he"), &["Hebrew"]),
    ("her", None, Some("hz"), &["Herero"]),
    ("hin", None, Some("hi"), &["Hindi"]),
    ("hmn", None, None, &["Hmong", "Mong"]),
    ("hmo", None, Some("ho"), &["Hiri Motu"]),
    ("hrv", None, Some("hr"), &["Croatian"]),
    ("hun", None, Some("hu"), &["Hungarian"]),
    ("ibo", None, Some("ig"), &["Igbo"]),
    ("ice", Some("isl"), Some("is"), &["Icelandic"]),
    ("ido", None, Some("io"), &["Ido"]),
    ("iii", None, Some("ii"), &["Sichuan Yi", "Nuosu"]),
    ("iku", None, Some("iu"), &["Inuktitut"]),
    ("ile", None, Some("ie"), &["Interlingue", "Occidental"]),
    ("ina", None, Some("ia"), &["Interlingua (International Auxiliary Language Association)"]),
    ("ind", None, Some("id"), &["Indonesian"]),
    ("ipk", None, Some("ik"), &["Inupiaq"]),
    ("ita", None, Some("it"), &["Italian"]),
    ("jav", None, Some("jv"), &["Javanese"]),
    ("jpn", None, Some("ja"), &["Japanese"]),
    ("kal", None, Some("kl"), &["Kalaallisut", "Greenlandic"]),
    ("kan", None, Some("kn"), &["Kannada"]),
    ("kas", None, Some("ks"), &["Kashmiri"]),
    ("kau", None, Some("kr"), &["Kanuri"]),
    ("kaz", None, Some("kk"), &["Kazakh"]),
    ("khm", None, Some("km"), &["Central Khmer"]),
    ("kik", None, Some("ki"), &["Kikuyu", "Gikuyu"]),
    ("kin", None, Some("rw"), &["Kinyarwanda"]),
    ("kir", None, Some("ky"), &["Kirghiz", "Kyrgyz"]),
    ("kom", None, Some("kv"), &["Komi"]),
    ("kon", None, Some("kg"), &["Kongo"]),
    ("kor", None, Some("ko"), &["Korean"]),
    ("kua", None, Some("kj"), &["Kuanyama", "Kwanyama"]),
    ("kur", None, Some("ku"), &["Kurdish"]),
    ("lad", None, None, &["Ladino"]),
    ("lao", None, Some("lo"), &["Lao"]),
    ("lat", None, Some("la"), &["Latin"]),
    ("lav", None, Some("lv"), &["Latvian"]),
    ("lim", None, Some("li"), &["Limburgan", "Limburger", "Limburgish"]),
    ("lin", None, Some("ln"), &["Lingala"]),
    ("lit", None, Some("lt"), &["Lithuanian"]),
    ("ltz", None, Some("lb"), &["Luxembourgish", "Letzeburgesch"]),
    ("lub", None, Some("lu"), &["Luba-Katanga"]),
    ("lug", None, Some("lg"), &["Ganda"]),
    ("mac", Some("mkd"), Some("mk"), &["Macedonian"]),
    ("mah", None, Some("mh"), &["Marshallese"]),
    ("mal", None, Some("ml"), &["Malayalam"]),
    ("mao", Some("mri"), Some("mi"), &["Maori"]),
    ("mar", None, Some("mr"), &["Marathi"]),
    ("may", Some("msa"), Some("ms"), &["Malay"]),
    ("mlg", None, Some("mg"), &["Malagasy"]),
    ("mlt", None, Some("mt"), &["Maltese"]),
    ("mon", None, Some("mn"), &["Mongolian"]),
    ("mul", None, None, &["Multiple languages"]),
    ("nau", None, Some("na"), &["Nauru"]),
    ("nav", None, Some("nv"), &["Navajo", "Navaho"]),
    ("nbl", None, Some("nr"), &["Ndebele, South", "South Ndebele"]),
    ("nde", None, Some("nd"), &["Ndebele, North", "North Ndebele"]),
    ("ndo", None, Some("ng"), &["Ndonga"]),
    ("nds", None, None, &["Low German", "Low Saxon", "German, Low", "Saxon, Low"]),
    ("nep", None, Some("ne"), &["Nepali"]),
    ("nno", None, Some("nn"), &["Norwegian Nynorsk", "Nynorsk, Norwegian"]),
    ("nob", None, Some("nb"), &["Bokmål, Norwegian", "Norwegian Bokmål"]),
    ("non", None, None, &["Norse, Old"]),
    ("nor", None, Some("no"), &["Norwegian"]),
    ("nya", None, Some("ny"), &["Chichewa", "Chewa", "Nyanja"]),
    ("oci", None, Some("oc"), &["Occitan (post 1500)"]),
    ("oji", None, Some("oj"), &["Ojibwa"]),
    ("ori", None, Some("or"), &["Oriya"]),
    ("orm", None, Some("om"), &["Oromo"]),
    ("oss", None, Some("os"), &["Ossetian", "Ossetic"]),
    ("pan", None, Some("pa"), &["Panjabi", "Punjabi"]),
    ("per", Some("fas"), Some("fa"), &["Persian"]),
    ("pli", None, Some("pi"), &["Pali"]),
    ("pol", None, Some("pl"), &["Polish"]),
    ("por", None, Some("pt"), &["Portuguese"]),
    ("pus", None, Some("ps"), &["Pushto", "Pashto"]),
    ("que", None, Some("qu"), &["Quechua"]),
    ("roh", None, Some("rm"), &["Romansh"]),
    ("rum", Some("ron"), Some("ro"), &["Romanian", "Moldavian", "Moldovan"]),
    ("run", None, Some("rn"), &["Rundi"]),
    ("rus", None, Some("ru"), &["Russian"]),
    ("sag", None, Some("sg"), &["Sango"]),
    ("san", None, Some("sa"), &["Sanskrit"]),
    ("scn", None, None, &["Sicilian"]),
    ("sgn", None, None, &["Sign Languages"]),
    ("sin", None, Some("si"), &["Sinhala", "Sinhalese"]),
    ("slo", Some("slk"), Some("sk"), &["Slovak"]),
    ("slv", None, Some("sl"), &["Slovenian"]),
    ("sme", None, Some("se"), &["Northern Sami"]),
    ("smo", None, Some("sm"), &["Samoan"]),
    ("sna", None, Some("sn"), &["Shona"]),
    ("snd", None, Some("sd"), &["Sindhi"]),
    ("som", None, Some("so"), &["Somali"]),
    ("sot", None, Some("st"), &["Sotho, Southern"]),
    ("spa", None, Some("es"), &["Spanish", "Castilian"]),
    ("srd", None, Some("sc"), &["Sardinian"]),
    ("srp", None, Some("sr"), &["Serbian"]),
    ("ssw", None, Some("ss"), &["Swati"]),
    ("sun", None, Some("su"), &["Sundanese"]),
    ("swa", None, Some("sw"), &["Swahili"]),
    ("swe", None, Some("sv"), &["Swedish"]),
    ("syr", None, None, &["Syriac"]),
    ("tah", None, Some("ty"), &["Tahitian"]),
    ("tam", None, Some("ta"), &["Tamil"]),
    ("tat", None, Some("tt"), &["Tatar"]),
    ("tel", None, Some("te"), &["Telugu"]),
    ("tgk", None, Some("tg"), &["Tajik"]),
    ("tgl", None, Some("tl"), &["Tagalog"]),
    ("tha", None, Some("th"), &["Thai"]),
    ("tib", Some("bod"), Some("bo"), &["Tibetan"]),
    ("tir", None, Some("ti"), &["Tigrinya"]),
    ("ton", None, Some("to"), &["Tonga (Tonga Islands)"]),
    ("tpi", None, None, &["Tok Pisin"]),
    ("tsn", None, Some("tn"), &["Tswana"]),
    ("tso", None, Some("ts"), &["Tsonga"]),
    ("tuk", None, Some("tk"), &["Turkmen"]),
    ("tur", None, Some("tr"), &["Turkish"]),
    ("twi", None, Some("tw"), &["Twi"]),
    ("uig", None, Some("ug"), &["Uighur", "Uyghur"]),
    ("ukr", None, Some("uk"), &["Ukrainian"]),
    ("und", None, None, &["Undetermined"]),
    ("urd", None, Some("ur"), &["Urdu"]),
    ("uzb", None, Some("uz"), &["Uzbek"]),
    ("ven", None, Some("ve"), &["Venda"]),
    ("vie", None, Some("vi"), &["Vietnamese"]),
    ("vol", None, Some("vo"), &["Volapük"]),
    ("wel", Some("cym"), Some("cy"), &["Welsh"]),
    ("wln", None, Some("wa"), &["Walloon"]),
    ("wol", None, Some("wo"), &["Wolof"]),
    ("xho", None, Some("xh"), &["Xhosa"]),
    ("yid", None, Some("yi"), &["Yiddish"]),
    ("yor", None, Some("yo"), &["Yoruba"]),
    ("zha", None, Some("za"), &["Zhuang", "Chuang"]),
    ("zul", None, Some("zu"), &["Zulu"]),
    ("zxx", None, None, &["No linguistic content", "Not applicable"]),
];
