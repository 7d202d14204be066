//! Built-in palettes, listed from the last color of the ramp to the
//! first (see [`crate::Ramp::build`]).

pub(crate) const BUILTIN: &[(&str, &[&str])] = &[
    // Quick two and three color ramps.
    ("citric",
     &["#03AB11", "#FFF301"]),
    ("citrus",
     &["#15E602", "#FFFF33"]),
    ("berry",
     &["#7700FF", "#FF0080"]),
    ("forest",
     &["#E0E0E0", "#6BDA61", "#15E602"]),
    ("white:mango",
     &["#FFFFFF", "#FF00FF", "#FF0000"]),
    ("white:tango",
     &["#FFFFFF", "#FF00FF", "#9500FF"]),
    ("white:grove",
     &["#FFFFFF", "#FFF301", "#BAE61D", "#01DF29"]),
    ("white:jungle",
     &["#FFFFFF", "#FFF301", "#03AB11"]),
    ("white:orange",
     &["#FFFFFF", "#FFF301", "#FF7700"]),
    ("horizon",
     &["#000033", "#000075", "#0000B6", "#0000F8", "#2E00FF", "#6100FF",
       "#9408F7", "#C729D6", "#FA4AB5", "#FF6A95", "#FF8B74", "#FFAC53",
       "#FFCD32", "#FFEE11", "#FFFF60"]),

    // Ramps carried over from R.
    ("wolfgang.basic",
     &["#FFFFD9", "#EDF8B1", "#C7E9B4", "#7FCDBB", "#41B6C4", "#1D91C0",
       "#225EA8", "#253494", "#081D58"]),
    ("wolfgang.extra",
     &["#FFFFFF", "#FCFED3", "#E3F4B1", "#ABDEB6", "#60C1BF", "#2A9EC1",
       "#206AAD", "#243996", "#081D58"]),
    ("solar.flare",
     &["#3361A5", "#2884E7", "#1BA7FF", "#76CEFF", "#FFFFFF", "#FFE060",
       "#FA8E24", "#DA2828", "#A31D1D"]),
    ("solar.glare",
     &["#3361A5", "#2884E7", "#1BA7FF", "#76CEFF", "#FCFCFC", "#FFE060",
       "#FA8E24", "#DA2828", "#A31D1D"]),
    ("solar.basic",
     &["#214B85", "#1873CC", "#1E90FF", "#00BFFF", "#ACD8E5", "#D2D2D2",
       "#FFD700", "#ED2C2C", "#A31D1D"]),
    ("solar.extra",
     &["#3361A5", "#248AF3", "#14B3FF", "#88CEEF", "#C1D5DC", "#EAD397",
       "#FDB31A", "#E42A2A", "#A31D1D"]),
    ("solar.blues",
     &["#FCFCFC", "#C0E4FD", "#75CEFE", "#0CB9FF", "#1BA7FF", "#1E95FF",
       "#2884E7", "#3072C5", "#3361A5"]),
    ("solar.rojos",
     &["#FCFCFC", "#FFEDB0", "#FFDF5F", "#FEC510", "#FA8E24", "#F14C2B",
       "#DA2828", "#BE2222", "#A31D1D"]),
    ("samba.color",
     &["#1B85ED", "#1AA2F6", "#00BFFF", "#4AC596", "#00CC00", "#A7D400",
       "#FFD700", "#FFBE00", "#FFA500"]),
    ("samba.night",
     &["#1873CC", "#1798E5", "#00BFFF", "#4AC596", "#00CC00", "#A2E700",
       "#FFFF00", "#FFD200", "#FFA500"]),
    ("samba.light",
     &["#00D1FF", "#03AB11", "#FFF301"]),

    // Dark and diverging ramps.
    ("dusk:dawn",
     &["#98ABC5", "#8D91AD", "#827896", "#775F80", "#6B476B", "#93575B",
       "#B8684A", "#DB7933", "#FF8C00"]),
    ("dark:cyan",
     &["#000000", "#0E2824", "#014C44", "#0A5F4F", "#13725A", "#19997F",
       "#1EC0A6", "#19DFD2", "#00FFFF"]),
    ("dark:blue",
     &["#000000", "#00171F", "#002F3F", "#00475F", "#005F7F", "#00779F",
       "#008FBF", "#00A7DF", "#00BFFF"]),
    ("dark:citrus",
     &["#000000", "#22350F", "#3B680C", "#529111", "#6ABB15", "#74DD0F",
       "#7FFF00", "#ADF121", "#D1E131"]),
    ("dark:violet",
     &["#000000", "#1E0A35", "#31016A", "#4B0181", "#660099", "#7800CA",
       "#8A00FF", "#C800FF", "#FE00FF"]),
    ("ocean:green",
     &["#07519B", "#2975B4", "#5097C9", "#93C1DF", "#FCFCFC", "#CAEAC5",
       "#97D494", "#5BAB5A", "#006400"]),
    ("ocean:earth",
     &["#0F3341", "#1563AA", "#0B99E6", "#3DCDFD", "#F7F7F7", "#B87350",
       "#872E1C", "#601622", "#401C2A"]),
    ("ocean:brick",
     &["#0F3341", "#1563AA", "#0B99E6", "#3DCDFD", "#F7F7F7", "#EB9457",
       "#D1551F", "#B02F1B", "#8D1616"]),
    ("algae:earth",
     &["#543005", "#985D12", "#CFA154", "#F0DEB1", "#F5F5F5", "#B5E2DC",
       "#5AB2A8", "#0E726A", "#003C30"]),
    ("flame.flame",
     &["#000033", "#0000A5", "#1E00FB", "#6F00FD", "#C628D6", "#FE629D",
       "#FF9B64", "#FFD52C", "#FFFF5F"]),
    ("flame.light",
     &["#000033", "#000E92", "#1300FF", "#8E0EEA", "#C628D6", "#E9699F",
       "#FF9B63", "#FFCE62", "#FFFF5F"]),
    ("flame.polar",
     &["#C628D6", "#8E0EEA", "#1300FF", "#000E92", "#000033", "#7F494D",
       "#FF9B63", "#FFCE62", "#FFFF5F"]),
    ("flame.volts",
     &["#000000", "#371377", "#5F00FF", "#9400FF", "#BE00FF", "#E000EB",
       "#FF00D8", "#FF0090", "#FF004B"]),
    ("flame.watts",
     &["#FFFFFF", "#C190FF", "#5F00FF", "#9400FF", "#BE00FF", "#E000EB",
       "#FF00D8", "#FF0090", "#FF004B"]),
    ("flame.artic",
     &["#000000", "#371377", "#5F00FF", "#BD00EC", "#FF00D8", "#C7ACEC",
       "#00FFFF", "#0AD7D3", "#0DB2AA"]),
    ("flame.weird",
     &["#00FFFF", "#0AD7D3", "#0DB2AA", "#1C5551", "#000000", "#371377",
       "#5F00FF", "#BD00EC", "#FF00D8"]),
    ("flame.blind",
     &["#0DB2AA", "#0AD7D3", "#00FFFF", "#B1FFFE", "#FFFFFF", "#FFA3EC",
       "#FF00D8", "#BD00EC", "#5F00FF"]),
    ("flame.macaw",
     &["#000000", "#28410F", "#477C0E", "#64B114", "#9FCF23", "#C9E553",
       "#81F7D0", "#16DCD2", "#1AA58C"]),
    ("flame.wings",
     &["#D1E131", "#85C51D", "#529111", "#2F4E0F", "#000000", "#0F4338",
       "#107E6A", "#1BBBA7", "#00FFFF"]),

    // Calm and "china" ramps.
    ("calma.azules",
     &["#031C25", "#093B4D", "#1C5F77", "#3685A2", "#56A6C3", "#86C2D8",
       "#B6DDEB", "#F2FBFE"]),
    ("calma.musgos",
     &["#212503", "#444D09", "#6B771C", "#93A236", "#B4C356", "#CDD886",
       "#E4EBB6", "#FCFEF2"]),
    ("calma.bosque",
     &["#032506", "#094D0E", "#1C7722", "#36A23D", "#56C35D", "#86D88B",
       "#B6EBBA", "#F2FEF3"]),
    ("calma.marino",
     &["#032515", "#094D2D", "#1C774D", "#36A26F", "#56C390", "#86D8B2",
       "#B6EBD2", "#F2FEF8"]),
    ("calma.morado",
     &["#030925", "#09154D", "#1C2B77", "#3648A2", "#5668C3", "#8694D8",
       "#B6BFEB", "#F2F4FE"]),
    ("calma.manudo",
     &["#290303", "#590707", "#8C1616", "#BE2A2A", "#DF4A4A", "#ED8080",
       "#F7B4B4", "#FFEEEE"]),
    ("china.theory",
     &["#120324", "#420A4A", "#721D57", "#9B3850", "#BC6B58", "#D3B687",
       "#E6E8B7", "#F8FDF2"]),
    ("china.ranges",
     &["#031424", "#1F0A4A", "#721D64", "#9B3838", "#BCAB58", "#A0D387",
       "#B7E8CF", "#F2F9FD"]),
    ("china.weirdo",
     &["#04032E", "#2E0267", "#890BA3", "#DE15AF", "#FF347E", "#FF7772",
       "#FFCFAB", "#FFFBEA"]),
    ("china.basics",
     &["#25032E", "#670253", "#A30B48", "#DE1515", "#FF8534", "#FFE272",
       "#EEFFAB", "#F2FFEA"]),
    ("china.sunset",
     &["#031124", "#0C0A4A", "#451D72", "#91389B", "#BC589B", "#D38799",
       "#E8C1B7", "#FDF9F2"]),
    ("china.dragon",
     &["#03032A", "#2B065C", "#801491", "#C52696", "#E74671", "#F2917D",
       "#FADEB3", "#FEFFED"]),
    ("china.novice",
     &["#2A0E03", "#5C4406", "#7E9114", "#68C526", "#46E748", "#7DF2B2",
       "#B3FAF2", "#EDF9FF"]),

    // ColorBrewer schemes.
    ("brewer.fire",
     &["#FFFFE5", "#FFF7BC", "#FEE391", "#FEC44F", "#FE9929", "#EC7014",
       "#CC4C02", "#993404", "#662506"]),
    ("brewer.heat",
     &["#FFF7EC", "#FEE8C8", "#FDD49E", "#FDBB84", "#FC8D59", "#EF6548",
       "#D7301F", "#B30000", "#7F0000"]),
    ("brewer.orange",
     &["#FFF5EB", "#FEE6CE", "#FDD0A2", "#FDAE6B", "#FD8D3C", "#F16913",
       "#D94801", "#A63603", "#7F2704"]),
    ("brewer.red",
     &["#FFF5F0", "#FEE0D2", "#FCBBA1", "#FC9272", "#FB6A4A", "#EF3B2C",
       "#CB181D", "#A50F15", "#67000D"]),
    ("brewer.green",
     &["#F7FCF5", "#E5F5E0", "#C7E9C0", "#A1D99B", "#74C476", "#41AB5D",
       "#238B45", "#006D2C", "#00441B"]),
    ("brewer.blue",
     &["#F7FBFF", "#DEEBF7", "#C6DBEF", "#9ECAE1", "#6BAED6", "#4292C6",
       "#2171B5", "#08519C", "#08306B"]),
    ("brewer.purple",
     &["#FCFBFD", "#EFEDF5", "#DADAEB", "#BCBDDC", "#9E9AC8", "#807DBA",
       "#6A51A3", "#54278F", "#3F007D"]),
    ("brewer.violet",
     &["#FFF7F3", "#FDE0DD", "#FCC5C0", "#FA9FB5", "#F768A1", "#DD3497",
       "#AE017E", "#7A0177", "#49006A"]),
    ("brewer.jamaica",
     &["#006837", "#2DA154", "#86CB66", "#CCE982", "#FFFFBF", "#FDD380",
       "#F88D51", "#DE3F2E", "#A50026"]),
    ("brewer.marine",
     &["#F7FCF0", "#E0F3DB", "#CCEBC5", "#A8DDB5", "#7BCCC4", "#4EB3D3",
       "#2B8CBE", "#0868AC", "#084081"]),
    ("brewer.spectra",
     &["#5E4FA2", "#3F96B7", "#88CFA4", "#D7EF9B", "#FFFFBF", "#FDD380",
       "#F88D51", "#DC494C", "#9E0142"]),
    ("brewer.celsius",
     &["#313695", "#5083BB", "#8FC3DD", "#D2ECF4", "#FFFFBF", "#FDD384",
       "#F88D51", "#DE3F2E", "#A50026"]),
    ("brewer.yes",
     &["#053061", "#2971B1", "#6AACD0", "#C1DDEB", "#F7F7F7", "#FACDB5",
       "#E58267", "#BB2933", "#67001F"]),

    // Two-hue blends.
    ("forest:yellow",
     &["#215E33", "#306835", "#3F7136", "#4E7B38", "#5D843A", "#6C8E3B",
       "#7B983D", "#89A13F", "#98AB41", "#A7B542", "#B6BE44", "#C5C846",
       "#D4D147", "#E3DB49"]),
    ("forest:citric",
     &["#0B3310", "#1B4210", "#2B5111", "#3B6111", "#4C7012", "#5C7F12",
       "#6C8E12", "#7C9E13", "#8CAD13", "#9CBC13", "#ADCB14", "#BDDB14",
       "#CDEA15", "#DDF915"]),
    ("citric:yellow",
     &["#21BE45", "#30C246", "#40C546", "#4FC947", "#5FCC48", "#6ED048",
       "#7DD349", "#8DD74A", "#9CDA4B", "#ABDE4B", "#BBE14C", "#CAE54D",
       "#DAE84D", "#E9EC4E"]),
    ("ocean:citrus",
     &["#3683BA", "#418BB0", "#4C93A7", "#569B9D", "#61A393", "#6CAB8A",
       "#77B380", "#81BA76", "#8CC26C", "#97CA63", "#A2D259", "#ACDA4F",
       "#B7E246", "#C2EA3C"]),
    ("ocean:pink",
     &["#3B5E84", "#4A5E84", "#595E84", "#685E84", "#765E84", "#855E84",
       "#945E84", "#A35F85", "#B25F85", "#C15F85", "#CF5F85", "#DE5F85",
       "#ED5F85", "#FC5F85"]),
    ("ocean:red",
     &["#3B82AE", "#487AA1", "#547294", "#616987", "#6D617A", "#7A596D",
       "#865160", "#934853", "#9F4046", "#AC3839", "#B8302C", "#C5271F",
       "#D11F12", "#DE1705"]),
    ("ocean:aqua",
     &["#2668AA", "#2D6EAA", "#3574AA", "#3C7AAA", "#4380A9", "#4B86A9",
       "#528CA9", "#5993A9", "#6099A9", "#689FA9", "#6FA5A8", "#76ABA8",
       "#7EB1A8", "#85B7A8"]),
    ("ocean:teal",
     &["#0A0A66", "#15176C", "#202573", "#2B3279", "#364080", "#414D86",
       "#4C5A8D", "#576893", "#62759A", "#6D82A0", "#7890A7", "#839DAD",
       "#8EABB4", "#99B8BA"]),
    ("cyan:brick",
     &["#6CD0C2", "#70C3B3", "#74B6A5", "#78A996", "#7B9C88", "#7F8F79",
       "#83826A", "#87755C", "#8B684D", "#8F5B3E", "#924E30", "#964121",
       "#9A3413", "#9E2704"]),
    ("aqua:brick",
     &["#019BCF", "#0D94C2", "#1A8CB4", "#2685A7", "#337D99", "#3F768C",
       "#4C6E7E", "#586771", "#655F63", "#715856", "#7E5048", "#8A493B",
       "#97412D", "#A33A20"]),
    ("aqua:tan",
     &["#62ADBB", "#6CB0B5", "#75B2AF", "#7FB5A8", "#88B7A2", "#92BA9C",
       "#9BBD96", "#A5BF8F", "#AEC289", "#B8C583", "#C1C77D", "#CBCA76",
       "#D4CC70", "#DECF6A"]),
    ("cyan:tan",
     &["#4FE8C2", "#5BE3BB", "#67DEB5", "#73D9AE", "#7FD3A7", "#8BCEA1",
       "#97C99A", "#A4C493", "#B0BF8C", "#BCBA86", "#C8B47F", "#D4AF78",
       "#E0AA72", "#ECA56B"]),
    ("teal:orange",
     &["#0CB499", "#1DAE92", "#2EA98B", "#3FA384", "#4F9E7D", "#609876",
       "#71936F", "#828D69", "#938862", "#A4825B", "#B47D54", "#C5774D",
       "#D67246", "#E76C3F"]),
    ("teal:violet",
     &["#4B8B84", "#508184", "#567784", "#5B6D84", "#616384", "#665984",
       "#6B4F84", "#714683", "#763C83", "#7B3283", "#812883", "#861E83",
       "#8C1483", "#910A83"]),
    ("blue:cyan",
     &["#4111F2", "#4923F0", "#5135ED", "#5946EB", "#6258E8", "#6A6AE6",
       "#727CE3", "#7A8DE1", "#829FDE", "#8AB1DC", "#93C3D9", "#9BD4D7",
       "#A3E6D4", "#ABF8D2"]),
    ("purple:pink",
     &["#6848D1", "#7345CA", "#7F42C3", "#8A3FBC", "#953DB5", "#A13AAE",
       "#AC37A7", "#B734A1", "#C2319A", "#CE2E93", "#D92C8C", "#E42985",
       "#F0267E", "#FB2377"]),
    ("purple:baby",
     &["#511293", "#5A239B", "#6234A2", "#6B45AA", "#7356B2", "#7C67B9",
       "#8478C1", "#8D88C9", "#9599D1", "#9EAAD8", "#A6BBE0", "#AFCCE8",
       "#B7DDEF", "#C0EEF7"]),
    ("cyan:green",
     &["#29DDEA", "#31DCD8", "#39DCC7", "#41DBB5", "#4ADBA3", "#52DA92",
       "#5AD980", "#62D96E", "#6AD85C", "#72D74B", "#7BD739", "#83D627",
       "#8BD616", "#93D504"]),
    ("cyan:pink",
     &["#606BEF", "#6C6AE6", "#7869DD", "#8468D4", "#9168CB", "#9D67C2",
       "#A966B9", "#B565B1", "#C164A8", "#CD639F", "#DA6396", "#E6628D",
       "#F26184", "#FE607B"]),
    ("cyan:violet",
     &["#29E9AE", "#36DBAE", "#43CDAE", "#50BEAF", "#5EB0AF", "#6BA2AF",
       "#7894AF", "#8585B0", "#9277B0", "#9F69B0", "#AD5BB0", "#BA4CB1",
       "#C73EB1", "#D430B1"]),
    ("cyan:purple",
     &["#4ADBF1", "#51CFF0", "#59C3EF", "#60B7EE", "#68ABED", "#6F9FEC",
       "#7793EB", "#7E88EB", "#867CEA", "#8D70E9"]),
];
