//! ONIX product form codelist used for candidate records.

static CODELIST: &[(&str, &str)] = &[
    ("00", "Undefined"),
    ("AA", "Audio"),
    ("AB", "Audio cassette"),
    ("AC", "CD-Audio"),
    ("AD", "DAT"),
    ("AE", "Audio disc"),
    ("AF", "Audio tape"),
    ("AG", "MiniDisc"),
    ("AH", "CD-Extra"),
    ("AI", "DVD Audio"),
    ("AJ", "Downloadable audio file"),
    ("AK", "Pre-recorded digital audio player"),
    ("AL", "Pre-recorded SD card"),
    ("AM", "LP"),
    ("AN", "Downloadable and online audio file"),
    ("AO", "Online audio file"),
    ("AZ", "Other audio format"),
    ("BA", "Book"),
    ("BB", "Hardback"),
    ("BC", "Paperback / softback"),
    ("BD", "Loose-leaf"),
    ("BE", "Spiral bound"),
    ("BF", "Pamphlet"),
    ("BG", "Leather / fine binding"),
    ("BH", "Board book"),
    ("BI", "Rag book"),
    ("BJ", "Bath book"),
    ("BK", "Novelty book"),
    ("BL", "Slide bound"),
    ("BM", "Big book"),
    ("BN", "Part-work (fascículo)"),
    ("BO", "Fold-out book or chart"),
    ("BP", "Foam book"),
    ("BZ", "Other book format"),
    ("CA", "Sheet map"),
    ("CB", "Sheet map, folded"),
    ("CC", "Sheet map, flat"),
    ("CD", "Sheet map, rolled"),
    ("CE", "Globe"),
    ("CZ", "Other cartographic"),
    ("DA", "Digital (on physical carrier)"),
    ("DB", "CD-ROM"),
    ("DC", "CD-I"),
    ("DE", "Game cartridge"),
    ("DF", "Diskette"),
    ("DI", "DVD-ROM"),
    ("DJ", "Secure Digital (SD) Memory Card"),
    ("DK", "Compact Flash Memory Card"),
    ("DL", "Memory Stick Memory Card"),
    ("DM", "USB Flash Drive"),
    ("DN", "Double-sided CD/DVD"),
    ("DO", "BR-ROM"),
    ("DZ", "Other digital carrier"),
    ("EA", "Digital (delivered electronically)"),
    ("EB", "Digital download and online"),
    ("EC", "Digital online"),
    ("ED", "Digital download"),
    ("FA", "Film or transparency"),
    ("FC", "Slides"),
    ("FD", "OHP transparencies"),
    ("FE", "Filmstrip"),
    ("FF", "Film"),
    ("FZ", "Other film or transparency format"),
    ("LA", "Digital product license"),
    ("LB", "Digital product license key"),
    ("LC", "Digital product license code"),
    ("MA", "Microform"),
    ("MB", "Microfiche"),
    ("MC", "Microfilm"),
    ("MZ", "Other microform"),
    ("PA", "Miscellaneous print"),
    ("PB", "Address book"),
    ("PC", "Calendar"),
    ("PD", "Cards"),
    ("PE", "Copymasters"),
    ("PF", "Diary or journal"),
    ("PG", "Frieze"),
    ("PH", "Kit"),
    ("PI", "Sheet music"),
    ("PJ", "Postcard book or pack"),
    ("PK", "Poster"),
    ("PL", "Record book"),
    ("PM", "Wallet or folder"),
    ("PN", "Pictures or photographs"),
    ("PO", "Wallchart"),
    ("PP", "Stickers"),
    ("PQ", "Plate (lámina)"),
    ("PR", "Notebook / blank book"),
    ("PS", "Organizer"),
    ("PT", "Bookmark"),
    ("PU", "Leaflet"),
    ("PV", "Book plates"),
    ("PZ", "Other printed item"),
    ("SA", "Multiple-component retail product"),
    ("SB", "Multiple-component retail product, boxed"),
    ("SC", "Multiple-component retail product, slip-cased"),
    ("SD", "Multiple-component retail product, shrink-wrapped"),
    ("SE", "Multiple-component retail product, loose"),
    ("SF", "Multiple-component retail product, part(s) enclosed"),
    ("VA", "Video"),
    ("VF", "Videodisc"),
    ("VI", "DVD video"),
    ("VJ", "VHS video"),
    ("VK", "Betamax video"),
    ("VL", "VCD"),
    ("VM", "SVCD"),
    ("VN", "HD DVD"),
    ("VO", "Blu-ray"),
    ("VP", "UMD Video"),
    ("VQ", "CBHD"),
    ("VZ", "Other video format"),
    ("WW", "Mixed media product"),
    ("WX", "Multiple copy pack"),
    ("XA", "Trade-only material"),
    ("XB", "Dumpbin – empty"),
    ("XC", "Dumpbin – filled"),
    ("XD", "Counterpack – empty"),
    ("XE", "Counterpack – filled"),
    ("XF", "Poster, promotional"),
    ("XG", "Shelf strip"),
    ("XH", "Window piece"),
    ("XI", "Streamer"),
    ("XJ", "Spinner – empty"),
    ("XK", "Large book display"),
    ("XL", "Shrink-wrapped pack"),
    ("XM", "Boxed pack"),
    ("XN", "Pack (outer packaging unspecified)"),
    ("XO", "Spinner – filled"),
    ("XY", "Other point of sale – including retail product"),
    ("XZ", "Other point of sale"),
    ("ZA", "General merchandise"),
    ("ZB", "Doll or figure"),
    ("ZC", "Soft toy"),
    ("ZD", "Toy"),
    ("ZE", "Game"),
    ("ZF", "T-shirt"),
    ("ZG", "E-book reader"),
    ("ZH", "Tablet computer"),
    ("ZI", "Audiobook player"),
    ("ZJ", "Jigsaw"),
    ("ZK", "Mug"),
    ("ZL", "Tote bag"),
    ("ZM", "Tableware"),
    ("ZN", "Umbrella"),
    ("ZO", "Paints, crayons, pencils"),
    ("ZX", "Other toy/game accessories"),
    ("ZY", "Other apparel"),
    ("ZZ", "Other merchandise"),
];

/// Resolves an ONIX product form code to its description. Unknown codes are
/// returned unchanged so the raw value still shows up in tables.
pub fn candidate_format(code: &str) -> &str {
    for (value, description) in CODELIST {
        if *value == code {
            return description;
        }
    }
    code
}
